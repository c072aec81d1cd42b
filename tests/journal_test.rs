use customer_orders::clients::actor_client::ActorClient;
use customer_orders::config::Config;
use customer_orders::customer_actor::CustomerError;
use customer_orders::lifecycle::{OrderSystem, SystemError};
use customer_orders::model::{CustomerCreate, CustomerId, ProductCreate, Upc};
use customer_orders::product_actor::ProductError;
use customer_orders::seed;
use tempfile::TempDir;

fn journaled(dir: &TempDir) -> Config {
    Config {
        data_dir: Some(dir.path().to_path_buf()),
        buffer_size: 4,
        verbose: false,
    }
}

#[tokio::test]
async fn test_tables_survive_restart() {
    let dir = TempDir::new().unwrap();

    let system = OrderSystem::open(&journaled(&dir)).await.unwrap();
    let seeded = system.seed(seed::products(), seed::customers()).await.unwrap();
    system.shutdown().await.unwrap();

    assert!(dir.path().join("products.json").exists());
    assert!(dir.path().join("customers.json").exists());

    let system = OrderSystem::open(&journaled(&dir)).await.unwrap();
    let reloaded = system.seed(seed::products(), seed::customers()).await.unwrap();
    assert_eq!(reloaded, seeded);

    let wrench = system
        .product_client
        .find_by_upc(Upc::from("076111117166"))
        .await
        .unwrap()
        .expect("Product not reloaded");
    assert_eq!(wrench.manufacturer, "Husky Tools");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_ids_resume_after_restart() {
    let dir = TempDir::new().unwrap();

    let system = OrderSystem::open(&journaled(&dir)).await.unwrap();
    system.seed(Vec::new(), seed::customers()).await.unwrap();
    system.shutdown().await.unwrap();

    let system = OrderSystem::open(&journaled(&dir)).await.unwrap();
    let created = system
        .customer_client
        .create_customers(vec![CustomerCreate::new("Lane", "Lois", "Main st 5", "90001", "5550001")])
        .await
        .unwrap();
    assert_eq!(created[0].id, CustomerId(4));
    assert_eq!(system.customer_client.list().await.unwrap().len(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_batch_never_reaches_disk() {
    let dir = TempDir::new().unwrap();

    let system = OrderSystem::open(&journaled(&dir)).await.unwrap();
    system
        .product_client
        .create_products(vec![ProductCreate::new("A", "kept", "maker", "1", 1.0, 1)])
        .await
        .unwrap();
    let result = system
        .product_client
        .create_products(vec![
            ProductCreate::new("B", "dropped", "maker", "1", 1.0, 1),
            ProductCreate::new("A", "clash", "maker", "1", 1.0, 1),
        ])
        .await;
    assert!(matches!(result, Err(ProductError::PersistenceFailure(_))));
    system.shutdown().await.unwrap();

    let system = OrderSystem::open(&journaled(&dir)).await.unwrap();
    let upcs: Vec<Upc> = system
        .product_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.upc)
        .collect();
    assert_eq!(upcs, vec![Upc::from("A")]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_snapshot_fails_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("products.json"), b"not json").unwrap();

    let result = OrderSystem::open(&journaled(&dir)).await;
    assert!(matches!(
        result,
        Err(SystemError::Product(ProductError::PersistenceFailure(_)))
    ));
}

#[tokio::test]
async fn test_zero_buffer_is_a_config_error() {
    let config = Config {
        buffer_size: 0,
        ..Config::default()
    };
    assert!(matches!(OrderSystem::open(&config).await, Err(SystemError::Config(_))));
}

#[tokio::test]
async fn test_snapshot_with_last_possible_id_fails_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("customers.json"),
        br#"[{"id":18446744073709551615,"last_name":"Max","first_name":"Id","street":"End 1","zip":"99999","phone":"0"}]"#,
    )
    .unwrap();

    let result = OrderSystem::open(&journaled(&dir)).await;
    assert!(matches!(
        result,
        Err(SystemError::Customer(CustomerError::PersistenceFailure(msg))) if msg.contains("exhausted")
    ));
}

#[tokio::test]
async fn test_snapshot_with_zero_id_fails_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("customers.json"),
        br#"[{"id":0,"last_name":"Zero","first_name":"Id","street":"Nowhere 0","zip":"00000","phone":"0"}]"#,
    )
    .unwrap();

    let result = OrderSystem::open(&journaled(&dir)).await;
    assert!(matches!(
        result,
        Err(SystemError::Customer(CustomerError::PersistenceFailure(_)))
    ));
}
