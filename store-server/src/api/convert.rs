//! Type conversion module
//!
//! Converts database models (db::models) into API response models
//! (shared::models).

use crate::db::models as db;
use crate::db::repository::product::{CatalogEntry, StoreQuantity};
use crate::db::repository::staff::StaffSaleEntry;
use crate::db::repository::store::StateCount;
use shared::models as api;

// ============ Helpers ============

pub fn record_id_to_string(id: &surrealdb::RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<surrealdb::RecordId>) -> Option<String> {
    id.as_ref().map(record_id_to_string)
}

// ============ Customer ============

impl From<db::Customer> for api::Customer {
    fn from(c: db::Customer) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            first_name: c.first_name,
            last_name: c.last_name,
            phone: c.phone,
            email: c.email,
            street: c.street,
            city: c.city,
            state: c.state,
            zip_code: c.zip_code,
            approve_status: c.approve_status,
        }
    }
}

// ============ Staff ============

impl From<db::Staff> for api::Staff {
    fn from(s: db::Staff) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            phone: s.phone,
            active: s.active,
            store: record_id_to_string(&s.store),
            manager: option_record_id_to_string(&s.manager),
        }
    }
}

impl From<StaffSaleEntry> for api::StaffSale {
    fn from(e: StaffSaleEntry) -> Self {
        Self {
            order_id: record_id_to_string(&e.order),
            customer_name: e.customer_name,
        }
    }
}

// ============ Store ============

impl From<db::Store> for api::Store {
    fn from(s: db::Store) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            name: s.name,
            phone: s.phone,
            email: s.email,
            street: s.street,
            city: s.city,
            state: s.state,
            zip_code: s.zip_code,
        }
    }
}

impl From<StateCount> for api::StateStoreCount {
    fn from(c: StateCount) -> Self {
        Self {
            state: c.state,
            stores: c.stores,
        }
    }
}

impl From<StoreQuantity> for api::StoreSales {
    fn from(q: StoreQuantity) -> Self {
        Self {
            store_name: q.store_name,
            quantity: q.quantity,
        }
    }
}

// ============ Brand / Category ============

impl From<db::Brand> for api::Brand {
    fn from(b: db::Brand) -> Self {
        Self {
            id: option_record_id_to_string(&b.id),
            name: b.name,
        }
    }
}

impl From<db::Category> for api::Category {
    fn from(c: db::Category) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            name: c.name,
        }
    }
}

// ============ Product ============

impl From<db::Product> for api::Product {
    fn from(p: db::Product) -> Self {
        Self {
            id: option_record_id_to_string(&p.id),
            name: p.name,
            brand: record_id_to_string(&p.brand),
            category: record_id_to_string(&p.category),
            model_year: p.model_year,
            list_price: p.list_price,
        }
    }
}

impl From<CatalogEntry> for api::ProductCatalog {
    fn from(e: CatalogEntry) -> Self {
        Self {
            name: e.name,
            brand_name: e.brand_name,
            category_name: e.category_name,
        }
    }
}

// ============ Order ============

impl From<db::Order> for api::Order {
    fn from(o: db::Order) -> Self {
        Self {
            id: option_record_id_to_string(&o.id),
            customer: record_id_to_string(&o.customer),
            store: record_id_to_string(&o.store),
            staff: record_id_to_string(&o.staff),
            order_status: o.order_status,
            order_date: o.order_date,
            required_date: o.required_date,
            shipped_date: o.shipped_date,
        }
    }
}

// ============ OrderItem ============

impl From<db::OrderItem> for api::OrderItem {
    fn from(i: db::OrderItem) -> Self {
        Self {
            id: option_record_id_to_string(&i.id),
            order: record_id_to_string(&i.order),
            item_id: i.item_id,
            product: record_id_to_string(&i.product),
            quantity: i.quantity,
            list_price: i.list_price,
            discount: i.discount,
            order_approved: i.order_approved,
        }
    }
}

// ============ Stock ============

impl From<db::Stock> for api::Stock {
    fn from(s: db::Stock) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            store: record_id_to_string(&s.store),
            product: record_id_to_string(&s.product),
            quantity: s.quantity,
        }
    }
}

// ============ User ============

impl From<db::User> for shared::client::UserInfo {
    fn from(u: db::User) -> Self {
        Self {
            id: option_record_id_to_string(&u.id).unwrap_or_default(),
            username: u.username,
            roles: u.roles,
        }
    }
}
