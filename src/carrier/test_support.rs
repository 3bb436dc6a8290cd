//! Fake carrier server and fixtures shared by tests

use std::sync::{Mutex, Once};
use std::time::Duration;

use actix_web::{web, App, HttpServer};

use crate::carrier::credentials::{BearerToken, EMAIL_VAR, PASSWORD_VAR};
use crate::carrier::http_client::CarrierHttpClient;
use crate::carrier::shiprocket::ShipRocketClient;
use crate::domain::{ContactAddress, LineItem, PickupAddress, ProductLine};

pub const TEST_EMAIL: &str = "ops@vendor.in";
pub const TEST_PASSWORD: &str = "s3cret";

/// Start an in-process carrier on an ephemeral port; returns its base URL
pub async fn spawn_carrier<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake carrier");
    let addr = server.addrs()[0];

    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> ShipRocketClient {
    ShipRocketClient::with_http(CarrierHttpClient::new(base_url, "shiprocket-bridge-test", None).unwrap())
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> ShipRocketClient {
    ShipRocketClient::with_http(CarrierHttpClient::new(base_url, "shiprocket-bridge-test", Some(timeout)).unwrap())
}

pub fn test_token() -> BearerToken {
    BearerToken::from("test-token")
}

/// Point the environment credentials at the fake carrier's account
///
/// Every test installs the same values, so concurrent tests never observe
/// anything else.
pub fn install_env_credentials() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        std::env::set_var(EMAIL_VAR, TEST_EMAIL);
        std::env::set_var(PASSWORD_VAR, TEST_PASSWORD);
    });
}

/// Records what the fake carrier saw, in arrival order
#[derive(Default)]
pub struct Recorder(Mutex<Vec<String>>);

impl Recorder {
    pub fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub fn sample_item(secret_order_id: &str) -> LineItem {
    LineItem {
        secret_order_id: secret_order_id.to_string(),
        order_date: None,
        pickup_location: "Vendor Warehouse".to_string(),
        billing: ContactAddress {
            customer_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            address: "12 MG Road".to_string(),
            address_2: String::new(),
            city: "Bengaluru".to_string(),
            pincode: "560001".to_string(),
            state: "Karnataka".to_string(),
            country: "India".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        },
        shipping: None,
        product: ProductLine {
            name: "Cotton Kurta".to_string(),
            sku: format!("SKU-{}", secret_order_id),
            price: 499.0,
            quantity: 2,
            discount: 0.0,
        },
        order_id_shiprocket: None,
        shipment_id: None,
    }
}

pub fn pickup_address() -> PickupAddress {
    PickupAddress {
        pickup_location: "Vendor Warehouse".to_string(),
        name: "Ravi Traders".to_string(),
        email: "ravi@traders.in".to_string(),
        phone: "9123456780".to_string(),
        address: "Plot 4, Okhla Phase 2".to_string(),
        address_2: String::new(),
        city: "New Delhi".to_string(),
        state: "Delhi".to_string(),
        country: "India".to_string(),
        pin_code: "110030".to_string(),
    }
}
