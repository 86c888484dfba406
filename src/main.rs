use clap::Parser;

mod migrate;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "specfile-migrate")]
#[command(about = "Rewrite a specification file in the nested attribute schema", long_about = None)]
struct Cli {
    /// Specification file to migrate in place (backed up to <FILE>.bak).
    file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    migrate::update(&cli.file)?;
    println!("Wrote {}", cli.file);

    Ok(())
}
