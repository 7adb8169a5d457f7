use std::path::Path;

use confpack_error::BuildResult;
use itertools::Itertools;
use oxc::{
  allocator::Allocator,
  codegen::Codegen,
  diagnostics::Severity as OxcSeverity,
  parser::Parser,
  semantic::SemanticBuilder,
  span::SourceType,
  transformer::{ESTarget, TransformOptions, Transformer},
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses plain JavaScript and prints it back through the codegen. Every
  /// snippet this repo emits goes through here, so output formatting is
  /// stable regardless of how the snippet was assembled.
  pub fn format(source: &str) -> BuildResult<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::default()).parse();
    if !ret.errors.is_empty() {
      return Err(anyhow::anyhow!("{:?}", ret.errors))?;
    }
    Ok(Codegen::new().build(&ret.program).code)
  }

  /// Compiles TypeScript-flavored source to plain executable JavaScript:
  /// syntax is lowered to `target`, then type annotations are stripped. The
  /// source is treated as TypeScript no matter what extension `path` carries.
  pub fn compile_typescript(source: &str, path: &str, target: ESTarget) -> BuildResult<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
    if !ret.errors.is_empty() {
      return Err(
        ret.errors.iter().map(|error| anyhow::anyhow!("{}", error.message)).collect::<Vec<_>>(),
      )?;
    }

    let mut program = ret.program;
    let semantic_ret = SemanticBuilder::new().build(&program);
    let (symbols, scopes) = semantic_ret.semantic.into_symbol_table_and_scope_tree();

    let mut transformer_options = TransformOptions::from(target);
    // The oxc jsx_plugin is enabled by default, we need to disable it.
    transformer_options.jsx.jsx_plugin = false;

    let ret = Transformer::new(&allocator, Path::new(path), &transformer_options)
      .build_with_symbols_and_scopes(symbols, scopes, &mut program);

    let errors = ret
      .errors
      .into_iter()
      .filter(|item| matches!(item.severity, OxcSeverity::Error))
      .collect_vec();
    if !errors.is_empty() {
      return Err(
        errors
          .iter()
          .map(|error| anyhow::anyhow!("{}", error.message))
          .collect::<Vec<anyhow::Error>>(),
      )?;
    }

    Ok(Codegen::new().build(&program).code)
  }
}

#[test]
fn basic_test() {
  let code = EcmaCompiler::format("const   a =   1;").unwrap();
  assert_eq!(code, "const a = 1;\n");
}

#[test]
fn strips_type_annotations() {
  let code = EcmaCompiler::compile_typescript(
    "const port: number = 3000;\nexport default { port };\n",
    "globalConfig.ts",
    ESTarget::ES2015,
  )
  .unwrap();
  assert!(code.contains("const port = 3000;"));
  assert!(!code.contains(": number"));
}

#[test]
fn surfaces_parse_errors() {
  let result = EcmaCompiler::compile_typescript("const = ;", "globalConfig.ts", ESTarget::ES2015);
  assert!(result.is_err());
}
