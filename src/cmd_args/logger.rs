/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! ログ機能の初期化を行うモジュール
//!

use std::sync::OnceLock;

use anyhow::Result;
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};

use super::Options;

/// 起動済みロガーのハンドル(プロセス終了まで保持する)
static LOGGER_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

///
/// ログ機能の初期化
///
/// # 概要
/// オプションで指定されたログレベルとログ出力先でロガーを起動する。ログレベル
/// にNONEが指定されている場合は何も行わない。
///
/// # 引数
/// * `opts` - オプション情報をパックしたオブジェクト
///
/// # 戻り値
/// 処理に成功した場合は`Ok(())`を返す。
///
pub(super) fn init(opts: &Options) -> Result<()> {
    /*
     * ログ抑止時は初期化を行わない
     */
    let filter: log::LevelFilter = opts.log_level().into();
    if filter == log::LevelFilter::Off {
        return Ok(());
    }

    /*
     * ログ出力先ディレクトリの作成
     */
    let log_output = opts.log_output();
    std::fs::create_dir_all(&log_output)?;

    /*
     * ロガーの構築
     */
    let mut logger = Logger::try_with_str(opts.log_level().as_ref())?
        .log_to_file(FileSpec::default().directory(&log_output))
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format);

    if opts.log_tee() {
        logger = logger.duplicate_to_stdout(Duplicate::All);
    }

    /*
     * ロガーの起動
     */
    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(handle);

    Ok(())
}
