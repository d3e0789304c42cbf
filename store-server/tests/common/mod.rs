//! Shared test fixtures: in-memory database plus seed helpers
#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use surrealdb::engine::local::{Db, Mem};
use surrealdb::{RecordId, Surreal};

use store_server::db::define_schema;
use store_server::db::models::{
    Brand, Category, Customer, Order, OrderItem, Product, Staff, Stock, Store,
};

/// Fresh in-memory database with the startup schema applied
pub async fn test_db() -> Surreal<Db> {
    let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    define_schema(&db).await.unwrap();
    db
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_store(db: &Surreal<Db>, key: &str, name: &str, city: &str, state: &str) {
    let store = Store {
        id: None,
        name: name.to_string(),
        phone: None,
        email: None,
        street: None,
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        zip_code: None,
    };
    let _: Option<Store> = db
        .create(RecordId::from(("store", key)))
        .content(store)
        .await
        .unwrap();
}

pub async fn seed_customer(
    db: &Surreal<Db>,
    key: &str,
    first_name: &str,
    last_name: &str,
    city: &str,
    zip_code: &str,
    approve_status: bool,
) {
    let customer = Customer {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: None,
        email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
        street: None,
        city: Some(city.to_string()),
        state: None,
        zip_code: Some(zip_code.to_string()),
        approve_status,
    };
    let _: Option<Customer> = db
        .create(RecordId::from(("customer", key)))
        .content(customer)
        .await
        .unwrap();
}

pub async fn seed_staff(
    db: &Surreal<Db>,
    key: &str,
    first_name: &str,
    store_key: &str,
    manager_key: Option<&str>,
) {
    let staff = Staff {
        id: None,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        email: format!("{}@example.com", first_name).to_lowercase(),
        phone: None,
        active: true,
        store: RecordId::from(("store", store_key)),
        manager: manager_key.map(|m| RecordId::from(("staff", m))),
    };
    let _: Option<Staff> = db
        .create(RecordId::from(("staff", key)))
        .content(staff)
        .await
        .unwrap();
}

pub async fn seed_brand(db: &Surreal<Db>, key: &str, name: &str) {
    let brand = Brand {
        id: None,
        name: name.to_string(),
    };
    let _: Option<Brand> = db
        .create(RecordId::from(("brand", key)))
        .content(brand)
        .await
        .unwrap();
}

pub async fn seed_category(db: &Surreal<Db>, key: &str, name: &str) {
    let category = Category {
        id: None,
        name: name.to_string(),
    };
    let _: Option<Category> = db
        .create(RecordId::from(("category", key)))
        .content(category)
        .await
        .unwrap();
}

pub async fn seed_product(
    db: &Surreal<Db>,
    key: &str,
    name: &str,
    brand_key: &str,
    category_key: &str,
    model_year: i32,
    list_price: Decimal,
) {
    let product = Product {
        id: None,
        name: name.to_string(),
        brand: RecordId::from(("brand", brand_key)),
        category: RecordId::from(("category", category_key)),
        model_year,
        list_price,
    };
    let _: Option<Product> = db
        .create(RecordId::from(("product", key)))
        .content(product)
        .await
        .unwrap();
}

pub async fn seed_order(
    db: &Surreal<Db>,
    key: &str,
    customer_key: &str,
    store_key: &str,
    staff_key: &str,
    order_status: i32,
    order_date: NaiveDate,
) {
    let order = Order {
        id: None,
        customer: RecordId::from(("customer", customer_key)),
        store: RecordId::from(("store", store_key)),
        staff: RecordId::from(("staff", staff_key)),
        order_status,
        order_date,
        required_date: order_date + chrono::Days::new(7),
        shipped_date: None,
    };
    let _: Option<Order> = db
        .create(RecordId::from(("order", key)))
        .content(order)
        .await
        .unwrap();
}

pub async fn seed_order_item(
    db: &Surreal<Db>,
    order_key: &str,
    item_id: i32,
    product_key: &str,
    quantity: i32,
    list_price: Decimal,
    discount: Decimal,
) {
    let item = OrderItem {
        id: None,
        order: RecordId::from(("order", order_key)),
        item_id,
        product: RecordId::from(("product", product_key)),
        quantity,
        list_price,
        discount,
        order_approved: None,
    };
    let _: Option<OrderItem> = db.create("order_item").content(item).await.unwrap();
}

pub async fn seed_stock(db: &Surreal<Db>, store_key: &str, product_key: &str, quantity: i32) {
    let stock = Stock {
        id: None,
        store: RecordId::from(("store", store_key)),
        product: RecordId::from(("product", product_key)),
        quantity,
    };
    let _: Option<Stock> = db.create("stock").content(stock).await.unwrap();
}
