//! Static listing catalogue.
//!
//! Listings are compiled into the binary and never mutated; pages only read
//! them through [`listings`] and [`find_listing`].

#[cfg(test)]
#[path = "catalogue_test.rs"]
mod catalogue_test;

/// One used bike offered on the marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listing {
    pub id: &'static str,
    pub name: &'static str,
    pub model: &'static str,
    pub color: &'static str,
    /// Asking price in whole rupees.
    pub price: u64,
    /// Odometer reading in kilometres.
    pub km: u64,
    pub image: &'static str,
    pub description: &'static str,
}

impl Listing {
    /// Route path of this listing's detail page.
    pub fn path(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Price with currency symbol, e.g. `₹125,000`.
    pub fn price_label(&self) -> String {
        format!("₹{}", group_thousands(self.price))
    }

    /// Distance driven, e.g. `12,000 km`.
    pub fn km_label(&self) -> String {
        format!("{} km", group_thousands(self.km))
    }
}

static LISTINGS: &[Listing] = &[
    Listing {
        id: "1",
        name: "Royal Enfield Classic 350",
        model: "2021",
        color: "Stealth Black",
        price: 165_000,
        km: 12_000,
        image: "https://images.pexels.com/photos/2393821/pexels-photo-2393821.jpeg",
        description: "Single owner, serviced at the authorised centre every 3,000 km. New tyres and battery.",
    },
    Listing {
        id: "2",
        name: "Bajaj Pulsar NS200",
        model: "2020",
        color: "Graphite Grey",
        price: 98_000,
        km: 18_500,
        image: "https://images.pexels.com/photos/1413412/pexels-photo-1413412.jpeg",
        description: "Well maintained street bike with ABS. Minor scratches on the tank shroud.",
    },
    Listing {
        id: "3",
        name: "KTM Duke 390",
        model: "2022",
        color: "Electronic Orange",
        price: 255_000,
        km: 7_800,
        image: "https://images.pexels.com/photos/2116475/pexels-photo-2116475.jpeg",
        description: "Stock exhaust, quickshifter enabled, full service history. Garage kept.",
    },
    Listing {
        id: "4",
        name: "Yamaha MT-15",
        model: "2021",
        color: "Ice Fluo Vermillion",
        price: 135_000,
        km: 10_200,
        image: "https://images.pexels.com/photos/5192876/pexels-photo-5192876.jpeg",
        description: "Daily commuter in excellent condition. Comes with a spare key and tank pad.",
    },
    Listing {
        id: "5",
        name: "Honda CB350 H'ness",
        model: "2023",
        color: "Pearl Night Star Black",
        price: 190_000,
        km: 4_300,
        image: "https://images.pexels.com/photos/1715193/pexels-photo-1715193.jpeg",
        description: "Nearly new, still under manufacturer warranty. Crash guard and saddle stays fitted.",
    },
    Listing {
        id: "6",
        name: "TVS Apache RTR 160 4V",
        model: "2019",
        color: "Racing Red",
        price: 72_000,
        km: 26_700,
        image: "https://images.pexels.com/photos/104842/bmw-vehicle-ride-bike-104842.jpeg",
        description: "Reliable city bike, chain sprocket replaced last month. Insurance valid till next year.",
    },
];

/// All listings in display order.
pub fn listings() -> &'static [Listing] {
    LISTINGS
}

/// Look up a listing by its id.
pub fn find_listing(id: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|listing| listing.id == id)
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
