mod args;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use ansi_term::Colour;
use args::{InputArgs, OutputArgs, PluginArgs};
use clap::Parser;

use confpack::{
  Compilation, CompilationAsset, Compiler, GlobalConfigPlugin, SharedPlugin,
};
use confpack_fs::{FileSystem, OsFileSystem};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  plugin: PluginArgs,
}

fn load_assets(fs: &OsFileSystem, dir: &Path, compilation: &mut Compilation) -> anyhow::Result<()> {
  for entry in std::fs::read_dir(dir)? {
    let entry = entry?;
    if entry.file_type()?.is_file() {
      let filename = entry.file_name().to_string_lossy().into_owned();
      let content = fs.read_to_string(&entry.path())?;
      compilation.emit_asset(filename, CompilationAsset::new(content));
    }
  }
  Ok(())
}

fn write_assets(fs: &OsFileSystem, dir: &Path, compilation: &Compilation) -> anyhow::Result<()> {
  fs.create_dir_all(dir)?;
  for (filename, asset) in &compilation.assets {
    fs.write(&dir.join(filename), asset.source().as_bytes())?;
  }
  Ok(())
}

fn print_output_assets(dir: &str, compilation: &Compilation) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(compilation.assets.len());

  for (filename, asset) in &compilation.assets {
    let size = format!("{:.2}", asset.size() as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if filename.len() > left {
      left = filename.len()
    }

    assets.push((filename, size));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size) in assets {
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint(format!("{dir}/")),
      color.paint(filename.as_str()),
      "",
      dim.paint("asset"),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    )
  }
}

#[tokio::main]
async fn main() {
  let args = Commands::parse();

  let options = match args.plugin.into_options() {
    Ok(mut options) => {
      options.cwd = args.input.cwd;
      options
    }
    Err(error) => {
      println!("{} {}", Colour::Red.paint("Error:"), error);
      return;
    }
  };

  let fs = OsFileSystem;
  let plugins: Vec<SharedPlugin> = vec![Arc::new(GlobalConfigPlugin::new(options))];
  let mut compiler = Compiler::new(plugins);

  if let Err(error) = load_assets(&fs, &args.input.input, &mut compiler.compilation) {
    println!("{} {}", Colour::Red.paint("Error:"), error);
    return;
  }

  let start = Instant::now();
  match compiler.emit().await {
    Ok(()) => {
      // Print warnings
      for warning in &compiler.compilation.warnings {
        println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
      }

      let dir = args.output.dir.unwrap_or_else(|| "dist".to_string());
      if let Err(error) = write_assets(&fs, Path::new(&dir), &compiler.compilation) {
        println!("{} {}", Colour::Red.paint("Error:"), error);
        return;
      }

      // Print output assets
      if !compiler.compilation.assets.is_empty() {
        print_output_assets(&dir, &compiler.compilation);
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed))
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {}", Colour::Red.paint("Error:"), error);
      }
    }
  }
}
