#![allow(clippy::print_stdout)]

use std::sync::Arc;

use confpack::{Compiler, CompilationAsset, GlobalConfigOptions, GlobalConfigPlugin, SharedPlugin};
use confpack_fs::MemoryFileSystem;

#[tokio::main]
async fn main() {
  let fs = Arc::new(MemoryFileSystem::new(&[(
    "/app/globalConfig.ts",
    "const port: number = 3000;\nexport default { api: `http://localhost:${port}` };",
  )]));

  let plugin = GlobalConfigPlugin::with_fs(
    GlobalConfigOptions {
      global_config_file_path: Some("./globalConfig.ts".to_string()),
      cwd: Some("/app".into()),
      ..Default::default()
    },
    fs,
  );

  let plugins: Vec<SharedPlugin> = vec![Arc::new(plugin)];
  let mut compiler = Compiler::new(plugins);
  compiler
    .compilation
    .emit_asset("index.html", CompilationAsset::new("<html><body><h1>app</h1></body></html>"));

  let _ = compiler.emit().await;

  for (filename, asset) in &compiler.compilation.assets {
    println!("--- {filename}\n{}", asset.source());
  }
}
