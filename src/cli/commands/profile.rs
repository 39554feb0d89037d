use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, or_dash, pad_right};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let p = &cfg.profile;

    header("Profile");

    let name = or_dash(p.name.as_deref());
    println!("  {}", bold(name));
    println!("  {}\n", or_dash(p.email.as_deref()));

    let rows = [
        ("📞 Phone", p.phone.as_deref()),
        ("✉️  Email", p.email.as_deref()),
        ("📍 Address", p.address.as_deref()),
        ("💼 Position", p.position.as_deref()),
        ("🏢 Department", p.department.as_deref()),
        ("📅 Start date", p.start_date.as_deref()),
    ];

    for (label, value) in rows {
        println!("  {} {}", pad_right(label, 15), or_dash(value));
    }

    if p.name.is_none() && p.email.is_none() {
        println!();
        info("Fill in the `profile` section with `timeclock config --edit`.");
    }

    Ok(())
}
