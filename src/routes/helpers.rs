use std::error::Error;

use anyhow::Context;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// Compile the HTML views once. `.html` names keep tera's autoescaping on.
pub fn views() -> Result<tera::Tera, tera::Error> {
    let mut tera = tera::Tera::default();
    tera.add_raw_template(
        "campaign_preview.html",
        include_str!("../../views/campaign_preview.html"),
    )?;
    Ok(tera)
}

pub fn prepare_html_template(
    views: &tera::Tera,
    ctx: &tera::Context,
    template_name: &str,
) -> Result<String, anyhow::Error> {
    views
        .render(template_name, ctx)
        .with_context(|| format!("Failed rendering the {template_name} view"))
}
