// Command handlers module
pub mod show;
pub mod version;

// Re-exports for cleaner imports
pub use show::execute as show;
pub use version::execute as version;
