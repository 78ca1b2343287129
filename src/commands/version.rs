use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("wifipass version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
