use basexx::{Base, BaseRegistry, DynBase};

/// Which side of the conversion a base name is for.
#[derive(Debug, Clone, Copy)]
pub enum Direction {
    From,
    To,
}

impl Direction {
    fn flag(self) -> &'static str {
        match self {
            Direction::From => "--from",
            Direction::To => "--to",
        }
    }
}

/// Pick the base name from the command line, falling back to the configured default
pub fn base_name(
    config: &BaseRegistry,
    cli_name: Option<&str>,
    direction: Direction,
) -> Result<String, Box<dyn std::error::Error>> {
    let default = match direction {
        Direction::From => config.settings.default_from.as_deref(),
        Direction::To => config.settings.default_to.as_deref(),
    };
    cli_name
        .or(default)
        .map(str::to_string)
        .ok_or_else(|| format!("no base given: pass {} <NAME>", direction.flag()).into())
}

/// Helper function to create a base from config
pub fn create_base(
    config: &BaseRegistry,
    cli_name: Option<&str>,
    direction: Direction,
) -> Result<DynBase, Box<dyn std::error::Error>> {
    let name = base_name(config, cli_name, direction)?;
    let base = config.base(&name)?;
    log::debug!("{} base '{}' has radix {}", direction.flag(), name, base.radix());
    Ok(base)
}

/// Up to `limit` digits of a base, or `None` if they are not printable.
pub fn preview(base: &DynBase, limit: u32) -> Option<String> {
    (0..base.radix().min(limit))
        .map(|value| {
            base.digit_of(value)
                .ok()
                .filter(|d| d.is_ascii_graphic())
                .map(char::from)
        })
        .collect()
}
