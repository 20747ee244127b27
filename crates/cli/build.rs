use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("sentimetric")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Sentimetric Contributors")
        .about("Readability and sentiment metrics for web articles")
        .arg(
            clap::arg!([INPUT] "CSV file with URL_ID and URL columns, '-' for stdin, or a single http(s) URL")
                .required_unless_present("completions"),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (csv, json)")
                .value_name("FORMAT")
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(
            clap::arg!(--"stopwords-dir" <DIR> "Directory of stop-word files")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--"master-dict-dir" <DIR> "Directory holding positive-words.txt and negative-words.txt")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--concurrency <NUM> "Maximum number of pages fetched at once").default_value("1"))
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_name("SHELL")
                .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sentimetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sentimetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sentimetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sentimetric", &completions_dir).unwrap();

    println!("cargo:warning=Shell completions generated in: {}", completions_dir.display());
}
