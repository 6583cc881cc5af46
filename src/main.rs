use std::env;
use std::fs::File;
use std::io::{self, Read, Write};

use log::debug;

use sh2dasm::engine;
use sh2dasm::mitsubishi::{self, MitsuAnnotator};
use sh2dasm::output;
use sh2dasm::rom::Rom;

fn usage(program: &str) {
    println!("sh2dasm - disassembler for SuperH SH-2 engine-control ROMs");
    println!();
    println!("Usage: {} [options] <ROM file>", program);
    println!();
    println!("Options:");
    println!("  -o FILE   write the listing to FILE (default is standard output)");
    println!("  -m        perform fixups specific to Mitsubishi ECUs");
    println!("  -r        include RAM addresses in the listing");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut rom_path: Option<String> = None;
    let mut out_path: Option<String> = None;
    let mut mitsu = false;
    let mut output_ram = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-m" | "--mitsu" => mitsu = true,
            "-r" | "--ram" => output_ram = true,
            "-o" | "--output" => {
                i += 1;
                if i == args.len() {
                    eprintln!("Error: {} requires a file argument", args[i - 1]);
                    std::process::exit(1);
                }
                out_path = Some(args[i].clone());
            }
            other => {
                if rom_path.is_some() {
                    eprintln!("Error: unexpected argument '{}'", other);
                    std::process::exit(1);
                }
                rom_path = Some(other.to_string());
            }
        }
        i += 1;
    }

    let Some(rom_path) = rom_path else {
        usage(&args[0]);
        return Ok(());
    };

    let mut file = match File::open(&rom_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot open ROM file '{}': {}", rom_path, e);
            std::process::exit(1);
        }
    };
    let mut phys = Vec::new();
    if let Err(e) = file.read_to_end(&mut phys) {
        eprintln!("Error: cannot read ROM file '{}': {}", rom_path, e);
        std::process::exit(1);
    }
    debug!("loaded {} ({:#x} bytes)", rom_path, phys.len());

    let mut rom = match Rom::from_bytes(phys) {
        Ok(rom) => rom,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    rom.setup_vectors();
    let seeds = rom.entry_points();
    if mitsu {
        let mut annotator = MitsuAnnotator::new();
        engine::disassemble(seeds, &mut rom.model, Some(&mut annotator));
        mitsubishi::fixups(&mut rom.model);
    } else {
        engine::disassemble(seeds, &mut rom.model, None);
    }
    output::scan_free_space(&mut rom.model);

    match out_path {
        Some(path) => {
            let mut out = File::create(&path)?;
            output::write_listing(&rom.model, &mut out, output_ram)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::write_listing(&rom.model, &mut out, output_ram)?;
        }
    }
    Ok(())
}
