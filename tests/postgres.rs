//! Storage round trip against a real PostgreSQL server. Run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use items_api::{
    connect, ensure_items_table, Backend, ItemSearch, ItemService, NewItem, ServerConfig,
};

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn postgres_item_lifecycle() {
    let config = ServerConfig::from_env().expect("config");
    let pool = connect(&config).await.expect("connect");
    assert_eq!(ensure_items_table(&pool).await.expect("ddl"), Backend::Postgres);
    let mut conn = pool.acquire().await.expect("acquire");

    let new = NewItem {
        name: "PgProbeWidget".into(),
        description: "lifecycle probe".into(),
        price: 15.0,
        quantity: 2.5,
    };
    let created = ItemService::create(&mut conn, &new).await.expect("create");
    assert_eq!(created.name, new.name);
    assert_eq!(created.quantity, 2.5);

    let found = ItemService::search(
        &mut conn,
        &ItemSearch {
            name: Some("pgprobewid".into()),
            min_price: Some(15.0),
            max_price: Some(15.0),
            ..Default::default()
        },
    )
    .await
    .expect("search");
    assert!(found.iter().any(|i| i.id == created.id));

    let changed = NewItem { price: 16.0, ..new };
    let updated = ItemService::update(&mut conn, created.id, &changed)
        .await
        .expect("update")
        .expect("row exists");
    assert_eq!(updated.price, 16.0);

    assert!(ItemService::delete(&mut conn, created.id).await.expect("delete"));
    assert!(!ItemService::delete(&mut conn, created.id).await.expect("second delete"));
    assert_eq!(ItemService::retrieve(&mut conn, created.id).await.expect("retrieve"), None);
}
