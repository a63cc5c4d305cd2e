//! Built-in sample records for the cities the catalog knows.

use super::CityEntry;
use crate::domain::entities::{
    Amenity, Coordinates, ListingDetails, ListingRecord, VisitingInfo,
};

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=400&q=80&ixlib=rb-4.0.3")
}

fn visiting(opening_hours: &str, entry_fee: &str, best_time: &str) -> Option<VisitingInfo> {
    Some(VisitingInfo {
        opening_hours: Some(opening_hours.to_string()),
        entry_fee: Some(entry_fee.to_string()),
        best_time: Some(best_time.to_string()),
        parking: None,
    })
}

struct Common<'a> {
    name: &'a str,
    rating: f64,
    address: &'a str,
    description: &'a str,
    photo: &'a str,
    at: (f64, f64),
}

impl Common<'_> {
    fn into_record(self, id: String, details: ListingDetails) -> ListingRecord {
        ListingRecord {
            id,
            name: self.name.to_string(),
            rating: self.rating,
            address: Some(self.address.to_string()),
            description: Some(self.description.to_string()),
            image_urls: vec![unsplash(self.photo)],
            coordinates: Coordinates::new(self.at.0, self.at.1),
            details,
        }
    }
}

fn hotel(city: &str, n: usize, common: Common<'_>, price: f64, amenities: &[&str]) -> ListingRecord {
    common.into_record(
        format!("{city}-hotel-{n}"),
        ListingDetails::Hotel {
            price: Some(price),
            amenities: amenities.iter().map(|a| Amenity::named(*a)).collect(),
        },
    )
}

fn attraction(
    city: &str,
    n: usize,
    common: Common<'_>,
    category: &str,
    info: Option<VisitingInfo>,
) -> ListingRecord {
    common.into_record(
        format!("{city}-attraction-{n}"),
        ListingDetails::Attraction {
            category: Some(category.to_string()),
            visiting_info: info,
            price_level: None,
        },
    )
}

fn monument(
    city: &str,
    n: usize,
    common: Common<'_>,
    built_year: &str,
    architecture: &str,
    info: Option<VisitingInfo>,
) -> ListingRecord {
    common.into_record(
        format!("{city}-monument-{n}"),
        ListingDetails::Monument {
            built_year: Some(built_year.to_string()),
            architecture: Some(architecture.to_string()),
            visiting_info: info,
            price_level: None,
        },
    )
}

pub(super) fn delhi() -> CityEntry {
    const CITY: &str = "delhi";

    let hotels = vec![
        hotel(
            CITY,
            1,
            Common {
                name: "Taj Palace Hotel",
                rating: 4.8,
                address: "Sardar Patel Marg, Diplomatic Enclave, New Delhi 110021",
                description: "A luxury 5-star hotel in the heart of New Delhi, known for its Mughal-inspired architecture and world-class service. Features 403 rooms and suites with views of the city.",
                photo: "1566073771259-6a8506099945",
                at: (28.5960, 77.1705),
            },
            25000.0,
            &[
                "Free WiFi",
                "Swimming Pool",
                "Spa & Wellness",
                "Multiple Restaurants",
                "Fitness Center",
                "Business Center",
                "Concierge",
                "Valet Parking",
            ],
        ),
        hotel(
            CITY,
            2,
            Common {
                name: "The Leela Palace New Delhi",
                rating: 4.6,
                address: "Chanakyapuri, New Delhi 110023",
                description: "A luxury hotel inspired by Lutyens' Delhi, featuring 254 rooms and suites. Known for its contemporary design and exceptional hospitality.",
                photo: "1571896349842-33c89424de2d",
                at: (28.5921, 77.1886),
            },
            18000.0,
            &[
                "Free WiFi",
                "Swimming Pool",
                "Spa",
                "Fine Dining",
                "Fitness Center",
                "Concierge",
                "Airport Shuttle",
                "Pet Friendly",
            ],
        ),
        hotel(
            CITY,
            3,
            Common {
                name: "Hotel Broadway",
                rating: 3.8,
                address: "4/15A Asaf Ali Road, New Delhi 110002",
                description: "A heritage hotel in Old Delhi, offering comfortable accommodation near the Red Fort and Jama Masjid. Built in 1956, it combines old-world charm with modern amenities.",
                photo: "1582719478250-c89cae4dc85b",
                at: (28.6418, 77.2350),
            },
            3500.0,
            &[
                "Free WiFi",
                "AC",
                "Restaurant",
                "Room Service",
                "Laundry Service",
                "Airport Transfer",
            ],
        ),
    ];

    let attractions = vec![
        attraction(
            CITY,
            1,
            Common {
                name: "Red Fort",
                rating: 4.7,
                address: "Netaji Subhash Marg, Lal Qila, Old Delhi, New Delhi 110006",
                description: "Built by Mughal Emperor Shah Jahan in 1639, this UNESCO World Heritage Site served as the main residence of Mughal emperors for nearly 200 years. The fort is made of red sandstone and covers an area of 254.67 acres.",
                photo: "1524492412937-b28074a5d7da",
                at: (28.6562, 77.2410),
            },
            "Historical",
            visiting(
                "9:30 AM - 4:30 PM (Closed Mondays)",
                "₹50 (Indians), ₹500 (Foreigners)",
                "October to March",
            ),
        ),
        attraction(
            CITY,
            2,
            Common {
                name: "India Gate",
                rating: 4.5,
                address: "Rajpath, India Gate, New Delhi 110003",
                description: "A 42-meter tall war memorial arch built in 1931 to honor the 70,000 Indian soldiers who died in World War I. Designed by Sir Edwin Lutyens, it is one of the largest war memorials in India.",
                photo: "1587474265384-2d1eef2878f5",
                at: (28.6129, 77.2295),
            },
            "Monument",
            visiting("24 hours (Daily)", "Free", "Evening (6-9 PM)"),
        ),
        attraction(
            CITY,
            3,
            Common {
                name: "Lotus Temple",
                rating: 4.6,
                address: "Lotus Temple Rd, Bahapur, Shambhu Dayal Bagh, Kalkaji, New Delhi 110019",
                description: "A Bahá'í House of Worship completed in 1986, known for its flowerlike architecture. The temple has 27 free-standing marble-clad \"petals\" arranged in clusters of three to form nine sides.",
                photo: "1578662996442-48f60103fc96",
                at: (28.5535, 77.2588),
            },
            "Religious",
            visiting(
                "9:00 AM - 7:00 PM (Closed Mondays)",
                "Free",
                "Morning or Evening",
            ),
        ),
    ];

    let monuments = vec![
        monument(
            CITY,
            1,
            Common {
                name: "Qutub Minar",
                rating: 4.6,
                address: "Mehrauli, New Delhi 110030",
                description: "A 73-meter tall brick minaret, the tallest in India, built between 1199-1220 by Qutub-ud-din Aibak and completed by Iltutmish. This UNESCO World Heritage Site is part of the Qutb complex and features five distinct storeys.",
                photo: "1587474265384-2d1eef2878f5",
                at: (28.5244, 77.1855),
            },
            "1199-1220",
            "Indo-Islamic",
            visiting(
                "Sunrise to Sunset (Daily)",
                "₹40 (Indians), ₹600 (Foreigners)",
                "October to March",
            ),
        ),
        monument(
            CITY,
            2,
            Common {
                name: "Humayun's Tomb",
                rating: 4.5,
                address: "Mathura Road, Nizamuddin, New Delhi 110013",
                description: "The tomb of the Mughal Emperor Humayun, built in 1570 by his widow Bega Begum. This UNESCO World Heritage Site is considered the first garden-tomb on the Indian subcontinent and inspired the design of the Taj Mahal.",
                photo: "1524492412937-b28074a5d7da",
                at: (28.5933, 77.2507),
            },
            "1570",
            "Mughal",
            visiting(
                "Sunrise to Sunset (Daily)",
                "₹40 (Indians), ₹600 (Foreigners)",
                "October to March",
            ),
        ),
    ];

    CityEntry {
        key: CITY,
        hotels,
        attractions,
        monuments,
    }
}

pub(super) fn mumbai() -> CityEntry {
    const CITY: &str = "mumbai";

    let hotels = vec![
        hotel(
            CITY,
            1,
            Common {
                name: "Taj Mahal Palace",
                rating: 4.9,
                address: "Apollo Bunder, Colaba, Mumbai 400001",
                description: "A historic luxury hotel opened in 1903, overlooking the Gateway of India and Arabian Sea. This iconic hotel has hosted numerous dignitaries and celebrities, featuring 285 rooms with a blend of Indian and European architecture.",
                photo: "1566073771259-6a8506099945",
                at: (18.9217, 72.8330),
            },
            35000.0,
            &[
                "Free WiFi",
                "Swimming Pool",
                "Spa & Wellness",
                "Multiple Restaurants",
                "Historic Architecture",
                "Concierge",
                "Valet Parking",
                "Sea View",
            ],
        ),
        hotel(
            CITY,
            2,
            Common {
                name: "The Oberoi Mumbai",
                rating: 4.7,
                address: "Nariman Point, Mumbai 400021",
                description: "A luxury hotel in the heart of Mumbai's business district, offering panoramic views of the Arabian Sea. Features 287 rooms and suites with contemporary design and world-class amenities.",
                photo: "1571896349842-33c89424de2d",
                at: (18.9270, 72.8205),
            },
            28000.0,
            &[
                "Free WiFi",
                "Swimming Pool",
                "Spa",
                "Fine Dining",
                "Sea View",
                "Business Center",
                "Concierge",
                "Airport Shuttle",
            ],
        ),
    ];

    let attractions = vec![
        attraction(
            CITY,
            1,
            Common {
                name: "Gateway of India",
                rating: 4.4,
                address: "Apollo Bunder, Colaba, Mumbai 400001",
                description: "A 26-meter tall arch-monument built in 1924 to commemorate the visit of King George V and Queen Mary to Mumbai in 1911. Designed by George Wittet in Indo-Saracenic style, it was the ceremonial entrance to India for British viceroys.",
                photo: "1587474265384-2d1eef2878f5",
                at: (18.9220, 72.8347),
            },
            "Monument",
            visiting("24 hours (Daily)", "Free", "Evening (5-8 PM)"),
        ),
        attraction(
            CITY,
            2,
            Common {
                name: "Marine Drive",
                rating: 4.3,
                address: "Marine Drive, Mumbai 400020",
                description: "A 3.6-kilometre-long boulevard in South Mumbai, also known as the \"Queen's Necklace\" due to its curved shape and street lights that resemble a string of pearls. It offers stunning views of the Arabian Sea and is a popular evening destination.",
                photo: "1578662996442-48f60103fc96",
                at: (18.9440, 72.8230),
            },
            "Nature",
            visiting("24 hours (Daily)", "Free", "Evening (6-9 PM)"),
        ),
    ];

    let monuments = vec![monument(
        CITY,
        1,
        Common {
            name: "Gateway of India",
            rating: 4.4,
            address: "Apollo Bunder, Colaba, Mumbai 400001",
            description: "A 26-meter tall arch-monument built in 1924 to commemorate the visit of King George V and Queen Mary to Mumbai in 1911. Designed by George Wittet in Indo-Saracenic style, it was the ceremonial entrance to India for British viceroys and is now a symbol of Mumbai.",
            photo: "1587474265384-2d1eef2878f5",
            at: (18.9220, 72.8347),
        },
        "1924",
        "Indo-Saracenic",
        visiting("24 hours (Daily)", "Free", "Evening (5-8 PM)"),
    )];

    CityEntry {
        key: CITY,
        hotels,
        attractions,
        monuments,
    }
}
