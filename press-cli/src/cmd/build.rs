use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use press_core::SiteBuilder;

use crate::config::load_build_config;

pub fn make_subcommand() -> Command {
    Command::new("build")
        .about("Build the site from markdown files")
        .arg(
            Arg::new("content")
                .long("content")
                .value_name("DIR")
                .help("Directory containing markdown files")
                .default_value("./content"),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .value_name("DIR")
                .help("Directory of static assets copied as-is")
                .default_value("./static"),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("FILE")
                .help("HTML page template with {{ Title }} and {{ Content }} tokens")
                .default_value("./template.html"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for the generated site")
                .default_value("./public"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./press.toml"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_build_config(args)?;
    let build = config.build_config();

    let summary = SiteBuilder::from_config(build).build()?;

    println!(
        "Site built: {} pages, {} assets in {}",
        summary.pages, summary.assets, build.output
    );

    Ok(())
}
