use tinted::error::Error;
use tinted::named::{lookup, names};
use tinted::{Alias, Attribute, StyledText, BOLD};

/// Print a handful of aliases and a swatch of named colors.
fn main() -> Result<(), Error> {
    let aliases = [
        Alias::new("INFO", (0, 0, 0), "#87ceeb")?.with_badge("i")?,
        Alias::new("WARN", (0, 0, 0), "#ffd700")?.with_badge("!")?,
        Alias::new("ERROR", (255, 255, 255), "#b22222")?
            .with_style(Attribute::Bold)
            .with_badge("x")?,
    ];

    for alias in aliases.iter() {
        let alias = alias.with_banner_width(9);
        println!("{} {} {}", alias.banner(), alias.badge(), alias.bare());
    }
    println!();

    for name in names().filter(|n| n.ends_with('4')).take(12) {
        if let Some(rgb) = lookup(name) {
            let text = StyledText::new(rgb)?.with_style(BOLD);
            println!("{} {}", text.render(&[name]), rgb);
        }
    }

    Ok(())
}
