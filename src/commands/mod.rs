// Command handlers module
pub mod generate;

// Re-exports for cleaner imports
pub use generate::execute as generate;
