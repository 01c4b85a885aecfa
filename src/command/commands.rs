/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンド"commands"の実装
//!

use anyhow::Result;
use clap::CommandFactory;

use crate::cmd_args::Options;
use super::CommandContext;

///
/// "commands"サブコマンドのコンテキスト情報をパックした構造体
///
struct CommandsCommandContext;

impl CommandsCommandContext {
    ///
    /// コマンド一覧の出力
    ///
    fn print_commands() {
        // サブコマンドは1階層のみのため再帰せず直接列挙する
        let root = Options::command();

        for sub in root.get_subcommands() {
            let description = sub
                .get_long_about()
                .or(sub.get_about())
                .map(|value| value.to_string())
                .unwrap_or_default();

            println!("{:<12} {}", sub.get_name(), description);
        }
    }
}

// CommandContextの実装
impl CommandContext for CommandsCommandContext {
    fn exec(&self) -> Result<()> {
        Self::print_commands();
        Ok(())
    }
}

///
/// コマンドコンテキストの生成
///
pub(crate) fn build_context(
    _opts: &Options,
) -> Result<Box<dyn CommandContext>> {
    Ok(Box::new(CommandsCommandContext))
}
