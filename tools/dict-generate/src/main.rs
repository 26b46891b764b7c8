use clap::{Arg, Command};
use pinyin_fmmseg::dictionary_lib::{self, PinyinDictionary};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const BLUE: &str = "\x1B[1;34m"; // Bold Blue
    const RESET: &str = "\x1B[0m"; // Reset color

    let matches = Command::new("Dictionary Generator")
        .about(format!(
            "{BLUE}Dict Generator: Pinyin dictionary artifacts from tables in ./dicts/{RESET}"
        ))
        .after_help(
            "Examples:\n\
         \n\
         dict-generate --format cbor --output pinyin_dictionary.cbor\n\
         dict-generate --format zstd --output pinyin_dictionary.zstd\n\
         \n\
         The generated CBOR can be loaded with PinyinDictionary::deserialize_from_cbor().\n",
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("format")
                .default_value("zstd")
                .value_parser(["zstd", "cbor", "json"])
                .help("Dictionary format: [zstd|cbor|json]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("filename")
                .help("Write generated dictionary to <filename>. If not specified, a default filename is used."),
        )
        .get_matches();

    let dict_dir = Path::new("dicts");
    if !dict_dir.exists() {
        eprintln!(
            "{BLUE}Local 'dicts/' directory not found.{RESET}\n\
         Please place phrases.txt and characters.txt under this folder."
        );
        return Ok(());
    }

    let dict_format = matches.get_one::<String>("format").map(String::as_str);

    let default_output = match dict_format {
        Some("zstd") => "pinyin_dictionary.zstd",
        Some("cbor") => "pinyin_dictionary.cbor",
        Some("json") => "pinyin_dictionary.json",
        _ => "pinyin_dictionary.unknown",
    };

    let output_file = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or(default_output);

    let dictionary = PinyinDictionary::from_dicts()?;
    eprintln!(
        "{BLUE}Loaded {} phrases (max length {}) and {} characters.{RESET}",
        dictionary.phrases.len(),
        dictionary.phrases.max_len,
        dictionary.characters.len()
    );

    match dict_format {
        Some("zstd") => {
            dictionary_lib::save_compressed(&dictionary, output_file)?;
            eprintln!("{BLUE}Dictionary saved in ZSTD format at: {output_file}{RESET}");
        }
        Some("cbor") => {
            dictionary.serialize_to_cbor(output_file)?;
            eprintln!("{BLUE}Dictionary saved in CBOR format at: {output_file}{RESET}");
        }
        Some("json") => {
            dictionary.serialize_to_json(output_file)?;
            eprintln!("{BLUE}Dictionary saved in JSON format at: {output_file}{RESET}");
        }
        other => {
            let format_str = other.unwrap_or("unknown");
            eprintln!("{BLUE}Unsupported format: {format_str}{RESET}");
        }
    }

    Ok(())
}
