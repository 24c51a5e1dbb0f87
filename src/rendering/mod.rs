pub mod text;
#[cfg(feature = "graphics")]
pub mod graphics;
