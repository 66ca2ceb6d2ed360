use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("postmetric")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Postmetric Contributors")
        .about("Score post content for structure, SEO and readability")
        .arg(clap::arg!(<INPUT> "HTML or text file to analyze, or '-' for stdin"))
        .arg(clap::arg!(-t --title <TITLE> "Post title used for SEO scoring"))
        .arg(clap::arg!(-m --"meta-description" <TEXT> "Meta description used for SEO scoring"))
        .arg(clap::arg!(-k --keyword <KEYWORD> "Focus keyword used for SEO scoring"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json, toml)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json", "toml"]),
        )
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--"reading-wpm" <WPM> "Reading rate used for the reading time estimate").default_value("200"))
        .arg(clap::arg!(--"speaking-wpm" <WPM> "Speaking rate used for the speaking time estimate").default_value("150"))
        .arg(clap::arg!(--"no-seo-messages" "Omit SEO messages from text output"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "postmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "postmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "postmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "postmetric", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
