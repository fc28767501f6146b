use man::prelude::*;
use std::path::Path;

fn main() {
    let page = Manual::new("dbfdecode")
        .about("convert legacy dBASE code page text to UTF-8")
        .flag(
            Flag::new()
                .short("-l")
                .long("--list")
                .help("List the accepted encoding names and exit."),
        )
        .flag(
            Flag::new()
                .short("-h")
                .long("--help")
                .help("Show help information."),
        )
        .option(
            Opt::new("NAME")
                .short("-e")
                .long("--encoding")
                .help(
                    "Source encoding: utf-8, utf-8-strict, windows-1250 or kamenicky. \
                     Aliases cp1250, cp895 and keybcs2 are also accepted. \
                     Defaults to kamenicky.",
                ),
        )
        .arg(Arg::new("[FILE...]"))
        .custom(
            Section::new("description")
                .paragraph(
                    "dbfdecode reads text extracted from legacy dBASE tables and \
                     writes it to stdout as UTF-8.",
                )
                .paragraph(
                    "Kamenický (KEYBCS2) is decoded as code page 437 with the \
                     Czech and Slovak letters repaired in place. Windows-1250 is \
                     decoded through its standard table. Input that is already \
                     valid UTF-8 is passed through unchanged by both.",
                )
                .paragraph(
                    "utf-8 copies input verbatim; utf-8-strict fails on input \
                     that is not valid UTF-8.",
                )
                .paragraph(
                    "Multiple files can be specified and will be processed in \
                     order. Use \\fB-\\fR to read from stdin explicitly. Maximum \
                     input size is 256 MiB.",
                ),
        )
        .example(
            Example::new()
                .text("Convert a Kamenický text dump")
                .command("dbfdecode names.txt > names.utf8.txt"),
        )
        .example(
            Example::new()
                .text("Convert Windows-1250 from stdin")
                .command("cat export.txt | dbfdecode -e cp1250"),
        )
        .custom(Section::new("environment").paragraph(
            "\\fBDBFDECODE_ENCODING\\fR sets the encoding used when \
             \\fB--encoding\\fR is not given.",
        ))
        .custom(Section::new("see also").paragraph("iconv(1)"))
        .render();

    // Write to OUT_DIR (standard cargo output directory)
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("dbfdecode.1");
    std::fs::write(&out_path, &page).unwrap();

    // Also write to target/man/ so packaging scripts have a stable path
    // that doesn't depend on the hash-based OUT_DIR.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let man_dir = Path::new(&manifest_dir).join("target").join("man");
    std::fs::create_dir_all(&man_dir).unwrap();
    std::fs::write(man_dir.join("dbfdecode.1"), &page).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
