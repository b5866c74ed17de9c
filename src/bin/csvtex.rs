//! csvtex CLI - Create LaTeX tabular output from CSV input

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use csvtex::{
    compose, read_rows, render, ColumnSelection, CsvFormat, CsvTexResult, DocumentOptions,
    EncodingPair, InputSource, OutputTarget, RenderOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "csvtex")]
#[command(about = "Create LaTeX tabular environments from CSV data")]
#[command(long_about = "Create tex formatted table (tabular environment) output from a csv \
file. Leading spaces are stripped from the column headers. Try 'csvtex -LV 4pt <INFILE>' if \
you are unsure which options to use. If no file is specified, the program reads from stdin \
and outputs to stdout. If only one file is specified, the program reads from the file and \
outputs to stdout.")]
struct Cli {
    /// Input file ('-' reads from stdin)
    infile: Option<String>,

    /// Output file ('-' writes to stdout)
    outfile: Option<String>,

    /// Argument to the tabular environment. Make sure that it is appropriate
    /// for the number of columns in the actual output. Default is 'cccc...',
    /// i.e. as many 'c' as there are columns
    #[arg(short = 'a', long, value_name = "ARGUMENT")]
    argument: Option<String>,

    /// Specify the columns (as index 0..N) in the order as they should appear
    /// in the tex output. A column may be specified multiple times.
    /// Example: -c 1,0,0,2
    #[arg(short = 'c', long = "column-order-int", value_name = "LIST")]
    column_order_int: Option<String>,

    /// Specify the columns (as string, i.e. the column header) in the order as
    /// they should appear in the tex output. A column may be specified
    /// multiple times. Example: -C name,title,name,address
    #[arg(
        short = 'C',
        long = "column-order-string",
        value_name = "LIST",
        conflicts_with_all = ["column_order_int", "noheader"]
    )]
    column_order_string: Option<String>,

    /// Do not escape column headers, assume that every header is valid latex
    #[arg(short = 't', long)]
    texheader: bool,

    /// Do not escape the cells, assume that every cell in the csv file is
    /// valid tex
    #[arg(short = 'T', long)]
    texcells: bool,

    /// Vertical space between the rows. Parameter needs to be a valid latex
    /// unit. Example: -V 5.5pt
    #[arg(short = 'V', long, value_name = "VSPACE")]
    vspace: Option<String>,

    /// Use a horizontal line after the header line (\hline). If the -V
    /// (--vspace) option is specified, an empty row with a negative vertical
    /// space of the same magnitude is added after the line
    #[arg(short = 'L', long)]
    headerline: bool,

    /// Treat the first row as data. Use -H for files that do not have a first
    /// line with column names
    #[arg(short = 'H', long)]
    noheader: bool,

    /// Encoding for input and output file, format <encoding in>[,<encoding
    /// out>]. If only <encoding in> is specified, it is assumed to be the
    /// encoding for both files. Example: -e utf-8
    #[arg(short = 'e', long, value_name = "ENCODING")]
    encoding: Option<String>,

    /// Enable verbose mode. Writes debug information to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Specify input file format, 1 to 2 characters: <delimiter><quotechar>
    #[arg(short = 'f', long, value_name = "INFORMAT")]
    informat: Option<String>,

    /// Output a compilable latex document, i.e. a document with preamble and
    /// \begin{document}...\end{document}
    #[arg(short = 'l', long)]
    latex: bool,

    /// Text prepended in front of the \begin{tabular} command.
    /// Example: -p "\centering" for a centered table
    #[arg(short = 'p', long, value_name = "PRETEXT")]
    pretext: Option<String>,

    /// Text appended after the \end{tabular} command
    #[arg(short = 'P', long, value_name = "POSTTEXT")]
    posttext: Option<String>,
}

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run() -> CsvTexResult<()> {
    let cli = Cli::parse();

    let format = match cli.informat.as_deref() {
        Some(spec) => CsvFormat::from_spec(spec)?,
        None => CsvFormat::default(),
    };

    let encodings = match cli.encoding.as_deref() {
        Some(spec) => EncodingPair::parse(spec)?,
        None => EncodingPair::default(),
    };
    if cli.verbose {
        eprintln!(
            "Selected encodings: in: {} out: {}",
            encodings.input.name(),
            encodings.output.name()
        );
    }

    let columns = if let Some(spec) = cli.column_order_int.as_deref() {
        ColumnSelection::parse_indices(spec)?
    } else if let Some(spec) = cli.column_order_string.as_deref() {
        ColumnSelection::parse_names(spec)
    } else {
        ColumnSelection::All
    };

    let options = RenderOptions {
        columns,
        tabular_arg: cli.argument,
        escape_headers: !cli.texheader,
        escape_cells: !cli.texcells,
        vspace: cli.vspace,
        header_line: cli.headerline,
        has_header: !cli.noheader,
        header_suffix: String::new(),
    };

    let input = InputSource::from_arg(cli.infile.as_deref());
    if cli.verbose {
        match &input {
            InputSource::File(path) => eprintln!("Reading from file '{}'", path),
            InputSource::Stdin => eprintln!("Reading from stdin"),
        }
    }
    let text = input.read_to_string(encodings.input)?;
    let rows = read_rows(&text, format)?;

    let rendered = render(&rows, &options)?;
    for warning in &rendered.warnings {
        eprintln!("{}", warning);
    }
    // An empty table short-circuits rendering; there is no selection to report.
    if cli.verbose && !rows.is_empty() {
        eprintln!("column headers: {:?}", rendered.headers);
        eprintln!("selected columns: {:?}", rendered.selected_columns);
    }

    let document = DocumentOptions {
        full_document: cli.latex,
        pretext: cli.pretext.unwrap_or_default(),
        posttext: cli.posttext.unwrap_or_default(),
    };
    let output_text = compose(&rendered.content, &document);

    let target = OutputTarget::from_arg(cli.outfile.as_deref());
    if cli.verbose {
        match &target {
            OutputTarget::File(path) => eprintln!("Writing to file '{}'", path),
            OutputTarget::Stdout => eprintln!("Writing to stdout"),
        }
    }
    target.write_all(&output_text, encodings.output)?;

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install csvtex --features cli");
    eprintln!("  csvtex [OPTIONS] [INFILE] [OUTFILE]");
}
