use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    let app = Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .args_conflicts_with_subcommands(true)
    .arg(
        arg!([text] ... "Texts to clean")
        .long_help(
            "Texts to clean, each one is processed as a separate record. \
                    When no text and no input file is given, the text is read from stdin.",
        ),
    )
    .arg(
        arg!(-c --chain <NAME> "Chain to use for cleaning")
        .long_help(
            "Name of the chain to apply. Built-in chains are \"lexical\" and \"abstract\"; \
                    chains declared in the configuration file ($ABSTRAK_CONFIG_DIR/abstrak.toml) \
                    can be used too. Defaults to the chain set in the configuration.",
        ),
    )
    .arg(
        arg!(-s --stage <NAME> ... "Stage to apply, in order (overrides --chain).")
        .long_help(
            "Explicitly lists the stages to apply. Stages run in the same order \
                    they are given. Use the \"stages\" subcommand to list them.",
        )
        .conflicts_with("chain"),
    )
    .arg(
        arg!(-i --input <PATTERN> ... "Reads the texts from files matching the pattern.")
        .long_help(
            "Reads each file matching the given glob pattern (e.g. \"data/*.txt\") \
                    and cleans its content.",
        ),
    )
    .arg(
        arg!(-p --punctuation <CHARS> "Characters removed by strip_punctuation.")
        .long_help("Overrides the default ASCII punctuation set used by the strip_punctuation stage."),
    )
    .arg(
        arg!(--special <CHARS> "Characters removed by strip_special_characters.")
        .long_help("Overrides the default special character set used by the strip_special_characters stage."),
    )
    .arg(
        arg!(--"keep-duplicate-whitespace" "Only trims, without collapsing whitespace runs.")
        .long_help("Makes collapse_whitespace trim the text without collapsing internal whitespace runs."),
    )
    .arg(
        arg!(-l --lines "Cleans every line as a separate record.")
        .long_help("Splits each input into lines and cleans them one by one, skipping blank lines."),
    )
    .arg(
        arg!(--json "Prints the cleaned records as a JSON array.")
    );

    app.subcommand(
        Command::new("stages")
        .alias("ls")
        .about("Lists the available stages."),
    )
    .subcommand(
        Command::new("chains")
        .about("Lists the available chains and their stages."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_definition() {
        build_app(false).debug_assert();
    }

    #[test]
    fn test_parse_stages() {
        let matches = build_app(false)
            .try_get_matches_from(["abstrak", "-s", "lower", "-s", "strip_digits", "A1"])
            .unwrap();
        let stages: Vec<&String> = matches.get_many::<String>("stage").unwrap().collect();
        assert_eq!(stages, vec!["lower", "strip_digits"]);
        assert_eq!(
            matches.get_one::<String>("text").map(|s| s.as_str()),
            Some("A1")
        );
    }

    #[test]
    fn test_stage_conflicts_with_chain() {
        let result =
            build_app(false).try_get_matches_from(["abstrak", "-s", "lower", "-c", "lexical"]);
        assert!(result.is_err());
    }
}
