use icon_bg_strip::config::init;
use icon_bg_strip::constants::{USTAZ_ICON, VERSION};
use icon_bg_strip::{init_logging, run_batch};

fn main() -> anyhow::Result<()> {
    init_logging();
    log::debug!("strip-ustaz-icon {}", VERSION);

    let config = init()?;
    run_batch(&config.icons_dir, &USTAZ_ICON);

    println!("\nUstaz AI icon background removed!");
    Ok(())
}
