use std::fmt::Write;

use brewfind_core::ShopRecord;

use crate::detail::StoreDetail;

pub fn store_table(stores: &[ShopRecord]) -> String {
    if stores.is_empty() {
        return "no coffee stores found\n".to_owned();
    }

    let mut out = String::new();
    for shop in stores {
        let _ = writeln!(out, "{}  {}", shop.id, shop.name);
        if !shop.address.is_empty() {
            let _ = writeln!(out, "    {}", shop.address);
        }
        if !shop.neighbourhood.is_empty() {
            let _ = writeln!(out, "    {}", shop.neighbourhood);
        }
    }
    out
}

pub fn store_detail(store: &StoreDetail) -> String {
    let shop = &store.shop;
    let mut out = String::new();
    let _ = writeln!(out, "{}", shop.name);
    let _ = writeln!(out, "  address:       {}", shop.address);
    if !shop.neighbourhood.is_empty() {
        let _ = writeln!(out, "  neighbourhood: {}", shop.neighbourhood);
    }
    let _ = writeln!(out, "  votes:         {}", store.votes);
    let _ = writeln!(out, "  image:         {}", shop.display_img_url());
    out
}
