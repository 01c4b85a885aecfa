/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド"help-all"の実装
//!

use anyhow::Result;
use clap::CommandFactory;

use crate::cmd_args::Options;
use super::CommandContext;

///
/// "help-all"サブコマンドのコンテキスト情報をパックした構造体
///
struct HelpAllCommandContext;

impl HelpAllCommandContext {
    ///
    /// ヘルプ情報の出力
    ///
    fn print_help_all() {
        // サブコマンドは1階層のみのため再帰せず直接列挙する
        let root = Options::command();

        for sub in root.get_subcommands() {
            let name = sub.get_name().to_string();
            let mut command = sub.clone();

            println!("\n----------------------------------------------");
            println!("{}\n", name);

            let help = command.render_long_help().to_string();
            for line in help.lines() {
                println!("  {}", line);
            }
        }
    }
}

// CommandContextの実装
impl CommandContext for HelpAllCommandContext {
    fn exec(&self) -> Result<()> {
        Self::print_help_all();
        Ok(())
    }
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(
    _opts: &Options,
) -> Result<Box<dyn CommandContext>> {
    Ok(Box::new(HelpAllCommandContext))
}
