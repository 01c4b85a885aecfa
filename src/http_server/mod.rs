/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! HTTPサーバに関する処理を集約するモジュール
//!

pub(crate) mod logger;

use anyhow::Result;
use actix_web::{App, HttpServer};
use actix_web::dev::Server;
use log::info;
use tokio::runtime::Builder;

use crate::rest_api;

use self::logger::AccessLogger;

pub(crate) fn run(addr: String, port: u16) -> Result<()> {
    /*
     * Tokioランタイムの構築
     */
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("tokio runtime failed");

    /*
     * サーバインスタンスの生成
     */
    let server = create_server(addr, port)?;

    /*
     * Tokioランタイムでのサーバの起動
     */
    info!("HTTP server start");

    match rt.block_on(async {server.await}) {
        Ok(()) => {
            info!("HTTP server exit");
            Ok(())
        }

        Err(err) => {
            info!("HTTP server failed");
            Err(err.into())
        }
    }
}

///
/// HTTPサーバーの生成
///
/// # 引数
/// * `addr` - サーバーをバインドさせるアドレス
/// * `port` - サーバーをバインドさせるポート番号
///
fn create_server(addr: String, port: u16) -> Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            // ロガーの設定
            .wrap(AccessLogger::new())

            // REST APIエンドポイント設定
            .service(rest_api::create_api_scope())
    })
    .bind(format!("{}:{}", addr, port))?;

    Ok(server.run())
}
