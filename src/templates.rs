// src/templates.rs

use tera::Tera;

/// Page templates, compiled into the binary.
/// Names ending in `.html` are auto-escaped by tera.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("home.html", include_str!("../templates/home.html"))?;
    Ok(tera)
}
