//! SQL statements for the `products` table. Every value is bound as a parameter.

pub const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        price NUMERIC(10, 2) NOT NULL,
        image_url VARCHAR(255)
    )
"#;

pub const COUNT: &str = "SELECT COUNT(*) FROM products";

/// Price is NUMERIC in storage and read back as DOUBLE PRECISION.
pub const SELECT_ALL: &str =
    "SELECT id, name, price::DOUBLE PRECISION AS price, image_url FROM products ORDER BY id DESC";

pub const SELECT_BY_ID: &str =
    "SELECT id, name, price::DOUBLE PRECISION AS price, image_url FROM products WHERE id = $1";

pub const INSERT: &str =
    "INSERT INTO products (name, price, image_url) VALUES ($1, $2::NUMERIC, $3) RETURNING id";

pub const UPDATE: &str =
    "UPDATE products SET name = $1, price = $2::NUMERIC, image_url = $3 WHERE id = $4";

pub const DELETE: &str = "DELETE FROM products WHERE id = $1";

pub const PING: &str = "SELECT 1";

/// Rows inserted by `seed_if_empty` on a fresh table.
pub const SEED_PRODUCTS: &[(&str, f64, &str)] = &[
    (
        "Produk A",
        100.00,
        "https://assets.example.com/products/product_a.jpg",
    ),
    (
        "Produk B",
        150.00,
        "https://assets.example.com/products/product_b.jpg",
    ),
];
