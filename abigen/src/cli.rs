//! Command-line interface: generate | file | support
use abigen_codegen::support::support_declarations;
use abigen_codegen::{
    FsDeclarationSink, FsSchemaSource, GeneratorOptions, generate_all, generate_with_options,
};
use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Default directory holding compiled contract ABIs.
pub const DEFAULT_ABI_ROOT: &str = ".lamington/compiled_contracts";

/// generate TypeScript contract declarations from EOSIO ABI files
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CommandLineInterface {
    /// more log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate declarations for every ABI below a directory
    Generate(GenerateArgs),
    /// generate declarations for a single ABI file
    File(FileArgs),
    /// print the shared runtime support declarations
    Support(SupportArgs),
}

#[derive(Args, Debug, Clone)]
struct RenderSettings {
    /// indent with N spaces instead of tabs
    #[arg(long)]
    indent_spaces: Option<usize>,

    /// module the generated files import runtime types from
    #[arg(long = "module", default_value = abigen_codegen::options::DEFAULT_RUNTIME_MODULE)]
    runtime_module: String,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// directory searched for `**/*.abi`
    #[arg(long, default_value = DEFAULT_ABI_ROOT)]
    root: PathBuf,

    /// directory receiving `<identifier>.ts` files
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    #[command(flatten)]
    render: RenderSettings,
}

#[derive(Args, Debug)]
struct FileArgs {
    /// ABI file to read
    abi: PathBuf,

    /// contract name (defaults to the file stem)
    #[arg(long)]
    name: Option<String>,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    render: RenderSettings,
}

#[derive(Args, Debug)]
struct SupportArgs {
    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// indent with N spaces instead of tabs
    #[arg(long)]
    indent_spaces: Option<usize>,
}

impl RenderSettings {
    fn options(&self) -> GeneratorOptions {
        let options = GeneratorOptions::new().with_runtime_module(&self.runtime_module);
        match self.indent_spaces {
            Some(width) => options.with_indent_spaces(width),
            None => options,
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> anyhow::Result<ExitCode> {
        match &self.cmd {
            Command::Generate(args) => run_generate(args),
            Command::File(args) => run_file(args),
            Command::Support(args) => {
                let indent = args
                    .indent_spaces
                    .map_or_else(|| "\t".to_string(), |width| " ".repeat(width));
                emit(args.out.as_deref(), &support_declarations(&indent))?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// COMMANDS
// ————————————————————————————————————————————————————————————————————————————

fn run_generate(args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    let source = FsSchemaSource::new(&args.root);
    let sink = FsDeclarationSink::new(&args.out);

    let report = generate_all(&source, &sink, &args.render.options())?;

    for (identifier, path) in &report.generated {
        println!("generated {identifier} -> {}", path.display());
    }
    for (identifier, error) in &report.failures {
        eprintln!("failed {identifier}: {error}");
    }
    println!(
        "{} generated, {} failed",
        report.generated.len(),
        report.failures.len()
    );

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_file(args: &FileArgs) -> anyhow::Result<ExitCode> {
    let contract_name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .abi
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .with_context(|| format!("cannot derive contract name from {}", args.abi.display()))?,
    };

    let json = std::fs::read_to_string(&args.abi)
        .with_context(|| format!("failed to read ABI file {}", args.abi.display()))?;
    let text = generate_with_options(&json, &contract_name, &args.render.options())
        .with_context(|| format!("failed to generate declarations for {}", args.abi.display()))?;

    emit(args.out.as_deref(), &text)?;
    Ok(ExitCode::SUCCESS)
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::tempdir;

    const HELLO_ABI: &str = r#"{
        "types": [],
        "structs": [{"name": "hi", "base": "", "fields": [{"name": "user", "type": "name"}]}],
        "actions": [{"name": "hi", "type": "hi"}],
        "tables": [],
        "variants": []
    }"#;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = CommandLineInterface::try_parse_from(["abigen", "generate"]).expect("parse");
        match cli.cmd {
            Command::Generate(args) => {
                assert_eq!(args.root, PathBuf::from(DEFAULT_ABI_ROOT));
                assert_eq!(args.out, PathBuf::from("."));
                assert_eq!(args.render.options(), GeneratorOptions::default());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = CommandLineInterface::try_parse_from(["abigen", "-vv", "support"]).expect("parse");
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_render_settings() {
        let cli = CommandLineInterface::try_parse_from([
            "abigen",
            "file",
            "token.abi",
            "--indent-spaces",
            "2",
            "--module",
            "@acme/chain",
        ])
        .expect("parse");
        match cli.cmd {
            Command::File(args) => {
                let options = args.render.options();
                assert_eq!(options.indent, "  ");
                assert_eq!(options.runtime_module, "@acme/chain");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_file_writes_output() {
        let dir = tempdir().expect("tempdir");
        let abi = dir.path().join("hello.abi");
        let out = dir.path().join("types/hello.ts");
        std::fs::write(&abi, HELLO_ABI).expect("write");

        let cli = CommandLineInterface::try_parse_from([
            OsStr::new("abigen"),
            OsStr::new("file"),
            abi.as_os_str(),
            OsStr::new("--out"),
            out.as_os_str(),
        ])
        .expect("parse");
        let code = cli.run().expect("run");

        assert_eq!(code, ExitCode::SUCCESS);
        let text = std::fs::read_to_string(out).expect("read");
        assert!(text.contains("export interface HelloHi {"));
    }

    #[test]
    fn test_run_generate_reports_failures() {
        let root = tempdir().expect("tempdir");
        let out = tempdir().expect("tempdir");
        std::fs::write(root.path().join("hello.abi"), HELLO_ABI).expect("write");
        std::fs::write(root.path().join("broken.abi"), "{}").expect("write");

        let cli = CommandLineInterface::try_parse_from([
            OsStr::new("abigen"),
            OsStr::new("generate"),
            OsStr::new("--root"),
            root.path().as_os_str(),
            OsStr::new("--out"),
            out.path().as_os_str(),
        ])
        .expect("parse");
        let code = cli.run().expect("run");

        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.path().join("hello.ts").is_file());
        assert!(!out.path().join("broken.ts").exists());
    }
}
