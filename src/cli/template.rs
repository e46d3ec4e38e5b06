use crate::cli::resolve_output;
use crate::error::Result;
use crate::exporter::{template_rows, write_rows, TEMPLATE_FILENAME};

pub fn run(output: Option<&str>) -> Result<()> {
    let out = resolve_output(output, TEMPLATE_FILENAME)?;
    write_rows(&out, &template_rows())?;
    println!("Wrote {}", out.display());
    Ok(())
}
