/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

//!
//! REST APIの実装を集約するモジュール
//!

mod hello;

use actix_web::dev::HttpServiceFactory;
use actix_web::http::header;
use actix_web::{HttpResponse, web};

/// キャッシュを禁止させる場合のCache-Controlヘッダのテンプレート
const NO_CACHE_TEMPLATE: &str = concat!(
    "no-store, ",
    "no-cache, ",
    "must-revalidate, ",
    "max-age=0",
);

///
/// Success (200)を返す場合のレスポンスビルド関数
///
/// # 引数
/// * `str` - レスポンスのボディに設定する文字列
///
/// # 戻り値
/// レスポンスオブジェクト
///
fn resp_200<S>(body: S) -> HttpResponse
where
    S: ToString,
{
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, NO_CACHE_TEMPLATE))
        .content_type("text/plain")
        .body(body.to_string())
}

///
/// REST APIエンドポイントの生成
///
pub(crate) fn create_api_scope() -> impl HttpServiceFactory {
    web::scope("")
        .route("/hello", web::get().to(hello::get))
}
