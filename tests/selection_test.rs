use std::io::Cursor;

use customer_orders::lifecycle::{OrderSystem, SeededRosters};
use customer_orders::model::{CustomerCreate, CustomerId, ProductCreate, Upc};
use customer_orders::seed;
use customer_orders::selection::{Selection, SelectionWorkflow, SessionSummary};

/// One customer (id 1) and one product (UPC "A"), created through the store.
async fn small_rosters() -> SeededRosters {
    let system = OrderSystem::new(4);
    let rosters = system
        .seed(
            vec![ProductCreate::new("A", "anvil", "Acme", "1", 10.0, 1)],
            vec![CustomerCreate::new("Coyote", "Wile", "Desert 1", "00001", "5551234")],
        )
        .await
        .unwrap();
    system.shutdown().await.unwrap();
    rosters
}

fn run_session(rosters: SeededRosters, input: &str) -> (SessionSummary, String) {
    let SeededRosters { customers, products } = rosters;
    let mut output = Vec::new();
    let summary = SelectionWorkflow::new(customers, products, Cursor::new(input), &mut output)
        .run()
        .unwrap();
    (summary, String::from_utf8(output).unwrap())
}

fn confirmed(customer: u64, upc: &str) -> Selection {
    Selection {
        customer: CustomerId(customer),
        upc: Upc::from(upc),
    }
}

#[tokio::test]
async fn test_direct_match() {
    let (summary, output) = run_session(small_rosters().await, "1\nA\n");

    assert_eq!(summary.selections, vec![confirmed(1, "A")]);
    assert_eq!(summary.format_errors, 0);
    assert_eq!(summary.lookup_misses, 0);
    assert!(!output.contains("Try again"));
}

#[tokio::test]
async fn test_bad_customer_token_is_one_format_error() {
    let (summary, output) = run_session(small_rosters().await, "x\n1\nA\n");

    assert_eq!(summary.format_errors, 1);
    assert_eq!(summary.lookup_misses, 0);
    assert_eq!(summary.selections, vec![confirmed(1, "A")]);
    assert!(output.contains("'x' is not a number. Try again."));
}

#[tokio::test]
async fn test_unknown_upc_restarts_from_customer_prompt() {
    let (summary, output) = run_session(small_rosters().await, "1\nZ\n1\nA\n");

    assert_eq!(summary.lookup_misses, 1);
    assert_eq!(summary.format_errors, 0);
    assert_eq!(summary.selections, vec![confirmed(1, "A")]);
    assert!(output.contains("Product 'Z' is not in the database. Try again."));

    // Both rosters shown for the failed and the successful attempt, plus the
    // customer roster once more before input ran out.
    assert_eq!(output.matches("Enter your customer ID").count(), 3);
    assert_eq!(output.matches("Enter your product's UPC").count(), 2);
    assert_eq!(output.matches("UPC A: anvil").count(), 2);
}

#[tokio::test]
async fn test_unknown_customer_id_is_a_lookup_miss() {
    let (summary, output) = run_session(small_rosters().await, "7\n-3\nq\n");

    assert_eq!(summary.lookup_misses, 2);
    assert!(summary.selections.is_empty());
    assert!(output.contains("Customer '7' is not in the database"));
    assert_eq!(output.matches("Enter your product's UPC").count(), 0);
}

#[tokio::test]
async fn test_roster_order_is_creation_order_every_round() {
    let system = OrderSystem::new(4);
    let rosters = system.seed(seed::products(), seed::customers()).await.unwrap();
    system.shutdown().await.unwrap();

    let (summary, output) = run_session(rosters, "3 076111117166\n2 076167817162\nQUIT\n");
    assert_eq!(
        summary.selections,
        vec![confirmed(3, "076111117166"), confirmed(2, "076167817162")]
    );

    let rounds: Vec<&str> = output.split("Enter your customer ID").collect();
    assert_eq!(rounds.len(), 4);
    for round in &rounds[..3] {
        let smith = round.rfind("Customer 1: Smith").unwrap();
        let dol = round.rfind("Customer 2: Dol").unwrap();
        let frank = round.rfind("Customer 3: Frank").unwrap();
        assert!(smith < dol && dol < frank);
    }
}

#[tokio::test]
async fn test_product_named_q_is_selected_not_treated_as_quit() {
    let system = OrderSystem::new(4);
    let rosters = system
        .seed(
            vec![ProductCreate::new("Q", "quoin", "Acme", "1", 3.0, 5)],
            vec![CustomerCreate::new("Coyote", "Wile", "Desert 1", "00001", "5551234")],
        )
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    let (summary, _) = run_session(rosters, "1\nQ\n1\nQ\n");
    assert_eq!(summary.selections, vec![confirmed(1, "Q"), confirmed(1, "Q")]);
    assert_eq!(summary.lookup_misses, 0);
}
