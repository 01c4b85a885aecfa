/*
 * Light weight greeting API server for local use
 *
 *  Copyright (C) 2025 Hiroshi KUWAGATA <kgt9221@gmail.com>
 */

mod common;

use std::fs;
use common::{
    build_client, prepare_test_dir, reserve_port, wait_for_server,
    ServerGuard,
};

#[test]
fn api_hello_rejects_other_methods() {
    let base_dir = prepare_test_dir();
    let port = reserve_port();

    let _server = ServerGuard::start(port, &base_dir);
    let hello_url = format!("http://127.0.0.1:{}/hello", port);
    wait_for_server(&hello_url);

    let client = build_client();

    /*
     * メソッド不一致の場合にハンドラが応答しないことの確認
     */
    let response = client.post(&hello_url).send().expect("request failed");
    assert!(response.status().is_client_error());
    assert_ne!(response.text().expect("read body failed"), "hello, world");

    fs::remove_dir_all(base_dir).expect("cleanup failed");
}

#[test]
fn unknown_path_returns_not_found() {
    let base_dir = prepare_test_dir();
    let port = reserve_port();

    let _server = ServerGuard::start(port, &base_dir);
    let hello_url = format!("http://127.0.0.1:{}/hello", port);
    wait_for_server(&hello_url);

    let client = build_client();

    /*
     * 未登録パスの確認
     */
    let other_url = format!("http://127.0.0.1:{}/goodbye", port);
    let response = client.get(&other_url).send().expect("request failed");
    assert_eq!(response.status().as_u16(), 404);

    fs::remove_dir_all(base_dir).expect("cleanup failed");
}
