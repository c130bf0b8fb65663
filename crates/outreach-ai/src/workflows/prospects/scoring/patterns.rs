//! Static keyword tables backing the ICP scoring rubric.
//!
//! All matching is lowercase substring containment, so every entry must be
//! lowercase. Order matters only where noted (title tiers and size ranges).

/// Phrases that mark a profile as an independent operator regardless of any
/// other signal. Checked against company name, title, and headline.
pub(crate) const FREELANCER_MARKERS: &[&str] = &[
    "self-employed",
    "self employed",
    "freelance",
    "freelancer",
    "independent contractor",
    "solopreneur",
    "solo",
];

/// Placeholder strings LinkedIn members enter instead of a real company name.
pub(crate) const FREELANCER_COMPANY_PLACEHOLDERS: &[&str] = &[
    "self-employed",
    "self employed",
    "freelance",
    "independent",
];

/// Service-side industries that support an agency classification.
pub(crate) const AGENCY_INDUSTRIES: &[&str] = &[
    "marketing",
    "advertising",
    "public relations",
    "design",
    "information technology",
    "consulting",
    "staffing",
    "recruiting",
    "professional services",
    "media production",
];

/// Agency self-description language searched in company + about + headline.
pub(crate) const AGENCY_KEYWORDS: &[&str] = &[
    "agency",
    "partner",
    "consulting",
    "consultancy",
    "help brands",
    "helping brands",
    "clients",
    "client roster",
    "digital marketing",
    "performance marketing",
    "growth marketing",
    "shopify partner",
    "full-service",
    "we work with",
];

/// Literal agency-style words in the company name itself.
pub(crate) const AGENCY_NAME_WORDS: &[&str] = &[
    "agency",
    "partners",
    "consulting",
    "consultancy",
    "group",
    "studios",
];

/// Product-side industries that support a merchant classification.
pub(crate) const MERCHANT_INDUSTRIES: &[&str] = &[
    "retail",
    "consumer goods",
    "apparel",
    "fashion",
    "food & beverage",
    "food and beverage",
    "food production",
    "jewelry",
    "cosmetics",
    "beauty",
    "furniture",
    "sporting goods",
    "luxury goods",
    "wine and spirits",
    "consumer electronics",
];

/// Merchant self-description language searched in company + about + headline.
pub(crate) const MERCHANT_KEYWORDS: &[&str] = &[
    "brand",
    "products",
    "sell",
    "shop",
    "dtc",
    "d2c",
    "direct-to-consumer",
    "direct to consumer",
    "shopify",
    "fulfillment",
    "manufacturer",
    "e-commerce",
    "ecommerce",
    "online store",
    "wholesale",
    "our customers",
];

/// Merchant-style words in the company name itself.
pub(crate) const MERCHANT_NAME_WORDS: &[&str] = &[
    "brand",
    "goods",
    "kitchen",
    "apparel",
    "wear",
    "shop",
    "store",
    "supply",
    "foods",
    "cosmetics",
    "co.",
];

/// C-suite markers used by the classifier tiebreaker.
pub(crate) const C_SUITE_MARKERS: &[&str] =
    &["ceo", "founder", "owner", "president", "coo", "chief"];

/// Title patterns worth the full 40 authority points. Spelled-out forms are
/// enumerated alongside abbreviations because "chief executive officer" does
/// not contain "ceo".
pub(crate) const TITLE_TOP_TIER: &[&str] = &[
    "ceo",
    "chief executive officer",
    "chief executive",
    "founder",
    "co-founder",
    "cofounder",
    "co founder",
    "owner",
    "coo",
    "chief operating officer",
    "chief operations officer",
    "president",
    "managing partner",
    "vp of operations",
    "vice president of operations",
    "head of operations",
    "director of operations",
    "operations director",
    "head of e-commerce",
    "head of ecommerce",
    "vp of e-commerce",
    "vp of ecommerce",
    "director of e-commerce",
    "director of ecommerce",
    "e-commerce director",
    "ecommerce director",
    "director of partnerships",
    "head of partnerships",
    "partnerships director",
    "vp of partnerships",
];

/// Title patterns worth 30 points.
pub(crate) const TITLE_SECONDARY_TIER: &[&str] = &[
    "vp of client success",
    "vice president of client success",
    "vp of customer success",
    "head of client success",
    "head of customer success",
    "partner",
    "principal",
    "operations manager",
    "head of fulfillment",
    "supply chain director",
    "e-commerce manager",
    "ecommerce manager",
];

/// Generic leadership terms worth 20 points.
pub(crate) const TITLE_DIRECTOR_TIER: &[&str] = &["director", "head of", "vice president", "vp"];

/// Qualified manager/lead/senior titles worth 10 points. A bare "manager"
/// with no qualifier scores zero, so this tier lists concrete titles rather
/// than the word itself.
pub(crate) const TITLE_MANAGER_TIER: &[&str] = &[
    "marketing manager",
    "brand manager",
    "product manager",
    "project manager",
    "account manager",
    "general manager",
    "store manager",
    "sales manager",
    "senior",
    "lead",
];

/// Revenue and volume superlatives worth the +15 scale bonus.
pub(crate) const SCALE_INDICATORS: &[&str] = &[
    "millions of customers",
    "million customers",
    "$10m",
    "$20m",
    "$50m",
    "$100m",
    "7-figure",
    "8-figure",
    "9-figure",
    "seven figure",
    "eight figure",
    "bestseller",
    "best seller",
    "inc 5000",
    "inc. 5000",
    "fortune 500",
    "fastest-growing",
    "fastest growing",
];

/// Amazon seller vocabulary, +10.
pub(crate) const AMAZON_SIGNALS: &[&str] = &[
    "amazon seller",
    "amazon fba",
    "sell on amazon",
    "amazon store",
    "fulfilled by amazon",
];

/// Direct-to-consumer vocabulary, +10.
pub(crate) const DTC_SIGNALS: &[&str] =
    &["dtc", "d2c", "direct-to-consumer", "direct to consumer"];

/// Generic e-commerce vocabulary, +8.
pub(crate) const ECOMMERCE_SIGNALS: &[&str] = &["e-commerce", "ecommerce"];

/// Online-shop vocabulary, +6.
pub(crate) const ONLINE_STORE_SIGNALS: &[&str] =
    &["online store", "online shop", "online brand", "online retailer"];

/// Fulfillment and logistics vocabulary, +8 for merchants only.
pub(crate) const FULFILLMENT_SIGNALS: &[&str] = &[
    "fulfillment",
    "fulfilment",
    "3pl",
    "third-party logistics",
    "warehousing",
    "shipping",
];

/// High-value retail industries worth the merchant-only +10 industry bonus.
pub(crate) const HIGH_VALUE_RETAIL_INDUSTRIES: &[&str] = &[
    "retail",
    "consumer goods",
    "apparel",
    "fashion",
    "cosmetics",
    "jewelry",
    "food & beverage",
    "food and beverage",
    "sporting goods",
];

/// Shopify partner phrasing worth the agency-only +12 bonus. The "plus"
/// variant is listed because "shopify plus partner" does not contain the
/// contiguous "shopify partner".
pub(crate) const AGENCY_PARTNER_SIGNALS: &[&str] = &["shopify partner", "shopify plus partner"];

/// Low-value commerce language worth +5.
pub(crate) const GENERAL_COMMERCE_SIGNALS: &[&str] = &["brand", "products", "customer"];

/// Product-category nouns worth the segment-independent +10 bonus.
pub(crate) const PRODUCT_CATEGORIES: &[&str] = &[
    "jewelry",
    "supplements",
    "skincare",
    "cosmetics",
    "beauty",
    "apparel",
    "clothing",
    "footwear",
    "candles",
    "coffee",
    "pet products",
    "home goods",
    "kitchen",
    "kitchenware",
    "fitness",
    "wellness",
    "snacks",
    "beverage",
    "accessories",
    "furniture",
    "toys",
];

/// LinkedIn company-size ranges mapped to representative employee-count
/// midpoints. Checked in order, first match wins; larger ranges come first
/// because several smaller keys are substrings of the larger strings
/// ("1-10" appears inside "501-1000").
pub(crate) const SIZE_MIDPOINTS: &[(&str, u32)] = &[
    ("10,000", 7500),
    ("10000", 7500),
    ("5,001", 7500),
    ("5001", 7500),
    ("1,001-5,000", 2500),
    ("1001-5000", 2500),
    ("1,000+", 2500),
    ("1000+", 2500),
    ("501-1,000", 750),
    ("501-1000", 750),
    ("500+", 750),
    ("201-500", 350),
    ("51-200", 100),
    ("11-50", 30),
    ("2-10", 5),
    ("1-10", 5),
    ("self-employed", 5),
    ("self employed", 5),
];

/// True when any pattern in `patterns` appears inside `text`.
pub(crate) fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|pattern| text.contains(pattern))
}
