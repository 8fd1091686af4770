use vitrine_storefront::catalog::ProductKey;

pub(crate) fn run() {
    for product in ProductKey::ALL {
        println!("{product}\t{}", product.display_price());
    }
}
