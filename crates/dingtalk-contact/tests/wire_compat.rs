//! End-to-end wire compatibility tests.
//!
//! These drive `ContactClient` through the real HTTP transport against a mock server and
//! check the exact method, path, query and body each directory call produces.

use dingtalk_contact::{ContactClient, DeptUserQuery, Error, Language};
use dingtalk_core::HttpTransportBuilder;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "wire-test-token";

fn client_for(server: &MockServer) -> ContactClient {
    let transport = HttpTransportBuilder::new(server.uri())
        .unwrap()
        .with_access_token(TOKEN)
        .build()
        .unwrap();
    ContactClient::new(Arc::new(transport))
}

fn ok(extra: Value) -> ResponseTemplate {
    let mut body = json!({"errcode": 0, "errmsg": "ok"});
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), extra) {
        target.extend(fields);
    }
    ResponseTemplate::new(200).set_body_json(body)
}

async fn expect_post(server: &MockServer, api_path: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/{api_path}").as_str()))
        .and(query_param("access_token", TOKEN))
        .and(body_json(body))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_user_posts_userid_and_language() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/topapi/v2/user/get"))
        .and(query_param("access_token", TOKEN))
        .and(body_json(json!({"userid": "U001", "language": "en_US"})))
        .respond_with(ok(json!({"result": {"userid": "U001", "name": "Zhang San"}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .get("U001", Some(Language::EnUs))
        .await
        .unwrap();
    assert_eq!(response["result"]["name"], "Zhang San");
    assert_eq!(response["errcode"], 0);
}

#[tokio::test]
async fn department_listings_send_default_paging() {
    let server = MockServer::start().await;
    let body = json!({
        "dept_id": 42,
        "cursor": 0,
        "size": 50,
        "order_field": "custom",
        "language": "zh_CN",
        "contain_access_limit": false
    });
    expect_post(&server, "topapi/user/listsimple", body.clone()).await;
    expect_post(&server, "topapi/v2/user/list", body).await;
    expect_post(&server, "topapi/user/listid", json!({"dept_id": 42})).await;

    let client = client_for(&server);
    let query = DeptUserQuery::default();
    client.get_users(42, &query).await.unwrap();
    client.get_detailed_users(42, &query).await.unwrap();
    client.get_user_ids(42).await.unwrap();
}

#[tokio::test]
async fn keyed_gets_use_query_parameters() {
    let server = MockServer::start().await;
    let cases = [
        ("user/delete", "userid", "U001"),
        ("topapi/user/get_admin_scope", "userid", "U002"),
        ("user/getUseridByUnionid", "unionid", "union-1"),
        ("user/getuserinfo", "code", "auth-code"),
        ("user/get_org_user_count", "onlyActive", "1"),
    ];
    for (api_path, key, value) in cases {
        Mock::given(method("GET"))
            .and(path(format!("/{api_path}").as_str()))
            .and(query_param("access_token", TOKEN))
            .and(query_param(key, value))
            .respond_with(ok(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/user/get_admin"))
        .and(query_param("access_token", TOKEN))
        .respond_with(ok(json!({"admin_list": [{"userid": "U001", "sys_level": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete("U001").await.unwrap();
    client.administrator_scope("U002").await.unwrap();
    client.get_userid_by_unionid("union-1").await.unwrap();
    client.get_user_by_code("auth-code").await.unwrap();
    client.get_activated_count().await.unwrap();

    let admins = client.administrators().await.unwrap();
    assert_eq!(admins["admin_list"][0]["sys_level"], 1);
}

#[tokio::test]
async fn role_and_user_mutations() {
    let server = MockServer::start().await;
    expect_post(
        &server,
        "topapi/role/addrolesforemps",
        json!({"userIds": "u1,u2", "roleIds": "r1,r2"}),
    )
    .await;
    expect_post(
        &server,
        "topapi/role/removerolesforemps",
        json!({"userIds": "u3", "roleIds": "r9"}),
    )
    .await;
    expect_post(
        &server,
        "user/create",
        json!({"name": "Li Si", "mobile": "13800000000", "department": [1]}),
    )
    .await;
    expect_post(
        &server,
        "user/update",
        json!({"userid": "U001", "position": "Engineer"}),
    )
    .await;
    expect_post(
        &server,
        "topapi/v2/user/getbymobile",
        json!({"mobile": "13800000000"}),
    )
    .await;
    expect_post(
        &server,
        "topapi/inactive/user/get",
        json!({"query_date": "20240305", "offset": 0, "size": 100}),
    )
    .await;

    let client = client_for(&server);
    client.add_roles(vec!["u1", "u2"], "r1,r2").await.unwrap();
    client.remove_roles("u3", vec!["r9"]).await.unwrap();

    let create = json!({"name": "Li Si", "mobile": "13800000000", "department": [1]});
    client.create(create.as_object().unwrap()).await.unwrap();

    let update = json!({"position": "Engineer"});
    client
        .update("U001", update.as_object().unwrap())
        .await
        .unwrap();

    client.get_userid_by_phone("13800000000").await.unwrap();
    client
        .get_inactive_users("20240305", 0, 100)
        .await
        .unwrap();
}

#[tokio::test]
async fn service_errors_surface_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/topapi/v2/user/get"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("U001", None).await.unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable(_)));
}

#[tokio::test]
async fn business_errors_are_returned_as_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/delete"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"errcode": 60121, "errmsg": "user not found"})),
        )
        .mount(&server)
        .await;

    let response = client_for(&server).delete("missing").await.unwrap();
    assert_eq!(response["errcode"], 60121);
}
