pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-channel cutoff: a pixel is dark when R, G and B are all below it.
pub const DARK_THRESHOLD: u8 = 40;

pub const NEON_ICONS: [&str; 4] = [
    "nav-home-neon.png",
    "nav-quran-neon.png",
    "nav-qiblat-neon.png",
    "nav-iqra-neon.png",
];

pub const USTAZ_ICON: [&str; 1] = ["nav-ustaz-ai.png"];
