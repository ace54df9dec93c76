use icon_bg_strip::config::init;
use icon_bg_strip::constants::{NEON_ICONS, VERSION};
use icon_bg_strip::{init_logging, run_batch};

fn main() -> anyhow::Result<()> {
    init_logging();
    log::debug!("strip-neon-icons {}", VERSION);

    let config = init()?;
    run_batch(&config.icons_dir, &NEON_ICONS);

    println!("\nAll neon icons processed to be transparent!");
    Ok(())
}
