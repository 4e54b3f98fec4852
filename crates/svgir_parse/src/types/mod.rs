#[cfg(feature = "lightningcss")]
mod lightningcss;
