/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! API HELLOの実装を行うモジュール
//!

use actix_web::HttpResponse;

use super::resp_200;

///
/// GET /hello の実体
///
/// # 概要
/// 固定の挨拶文字列"hello, world"を返す。リクエストのヘッダ・ボディ・クエリ
/// は一切参照しない。
///
/// # APIレスポンスの種別
/// text/plain
///
/// # 戻り値
/// actix-webのレスポンスオブジェクト
///
pub async fn get() -> actix_web::Result<HttpResponse> {
    Ok(resp_200("hello, world"))
}
