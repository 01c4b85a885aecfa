/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! サブコマンドの処理を提供するモジュール
//!

pub(crate) mod commands;
pub(crate) mod help_all;
pub(crate) mod run;

use anyhow::Result;

///
/// コマンドコンテキスト集約するトレイト
///
pub(crate) trait CommandContext {
    ///
    /// サブコマンドの実行
    ///
    fn exec(&self) -> Result<()>;
}
