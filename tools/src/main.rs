use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use scalar::{ByteOrder, Encoding, Transcoding};
use utfx_tools::{
    decode_window, encode_code_point, format_report_pretty, parse_code_point, parse_hex_window,
    TranscodingReport,
};

#[derive(Parser)]
#[command(
    name = "utfx-tools",
    version,
    about = "utfx transcoding inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the first code point from a hex byte window.
    Decode {
        /// Hex bytes, contiguous or separated (`E78CAB`, `E7 8C AB`).
        window: String,
        /// Encoding form to decode as.
        #[arg(long, default_value = "utf-8")]
        encoding: Encoding,
        /// Byte order for the 16/32-bit forms.
        #[arg(long, default_value = "le")]
        byte_order: ByteOrder,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Encode a code point into a byte sequence.
    Encode {
        /// Code point as `U+XXXX`, `0x...`, or decimal.
        code_point: String,
        /// Encoding form to encode into.
        #[arg(long, default_value = "utf-8")]
        encoding: Encoding,
        /// Byte order for the 16/32-bit forms.
        #[arg(long, default_value = "le")]
        byte_order: ByteOrder,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Decode {
            window,
            encoding,
            byte_order,
            format,
        } => {
            let bytes = parse_hex_window(&window).context("parse hex window")?;
            let record = decode_window(&bytes, encoding, byte_order);
            print_record(&record, format)?;
        }
        Command::Encode {
            code_point,
            encoding,
            byte_order,
            format,
        } => {
            let code_point = parse_code_point(&code_point).context("parse code point")?;
            let record = encode_code_point(code_point, encoding, byte_order);
            print_record(&record, format)?;
        }
    }
    Ok(())
}

fn print_record(record: &Transcoding, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = TranscodingReport::from(record);
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => {
            print!("{}", format_report_pretty(record));
        }
    }
    Ok(())
}
