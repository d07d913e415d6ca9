//! Static industry profile registry.
//!
//! Profiles are listed in tie-break order: when two profiles match the same
//! number of keywords, the one registered first wins.

use serde::Serialize;

/// Id of the profile used when nothing in a prompt matches.
pub const DEFAULT_PROFILE: &str = "saas";

/// Hero copy shown at the top of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

/// A titled feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A single headline number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A customer quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Stock imagery for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSet {
    pub hero: &'static str,
    pub features: [&'static str; 3],
    pub about: &'static str,
}

/// Everything a renderer needs to know about one industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryProfile {
    /// Stable id, also used as the content model's `app_type`.
    pub id: &'static str,
    /// Lowercase substrings that vote for this profile.
    pub keywords: &'static [&'static str],
    /// Palette id, resolved through [`crate::palette::palette`].
    pub color_scheme: &'static str,
    pub hero: Hero,
    pub features: &'static [Feature],
    pub stats: Option<&'static [Stat]>,
    pub testimonial: Option<Testimonial>,
    /// Section ids a page for this profile is made of.
    pub sections: &'static [&'static str],
    pub images: &'static ImageSet,
}

impl IndustryProfile {
    /// Whether the profile's section list names `section`.
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains(&section)
    }

    /// Titles of the first `n` features.
    pub fn feature_titles(&self, n: usize) -> impl Iterator<Item = &'static str> + '_ {
        self.features.iter().take(n).map(|f| f.title)
    }
}

macro_rules! pexels {
    ($id:literal, $width:literal) => {
        concat!(
            "https://images.pexels.com/photos/",
            $id,
            "/pexels-photo-",
            $id,
            ".jpeg?auto=compress&cs=tinysrgb&w=",
            $width
        )
    };
}

macro_rules! images {
    ($hero:literal, [$f1:literal, $f2:literal, $f3:literal], $about:literal) => {
        ImageSet {
            hero: pexels!($hero, "1920"),
            features: [pexels!($f1, "800"), pexels!($f2, "800"), pexels!($f3, "800")],
            about: pexels!($about, "1200"),
        }
    };
}

macro_rules! feature {
    ($title:literal, $description:literal) => {
        Feature {
            title: $title,
            description: $description,
        }
    };
}

macro_rules! stat {
    ($value:literal, $label:literal) => {
        Stat {
            value: $value,
            label: $label,
        }
    };
}

/// Images used by profiles without a dedicated set.
pub static DEFAULT_IMAGES: ImageSet = images!("3183197", ["3184292", "3183150", "3184418"], "3184360");

static SAAS_IMAGES: ImageSet = images!("3184292", ["3184291", "3183197", "3182773"], "3184360");
static ECOMMERCE_IMAGES: ImageSet = images!("6214478", ["5632402", "5632397", "5625120"], "5632382");
static RESTAURANT_IMAGES: ImageSet = images!("1581384", ["1640777", "262978", "1099680"], "67468");
static FITNESS_IMAGES: ImageSet = images!("841130", ["416809", "3757376", "4720267"], "3490348");
static REALESTATE_IMAGES: ImageSet = images!("323780", ["1396122", "259588", "1643383"], "1396132");
static HEALTHCARE_IMAGES: ImageSet = images!("4386467", ["4386466", "4386464", "4386476"], "4386431");
static PORTFOLIO_IMAGES: ImageSet = images!("196645", ["1779487", "326503", "3183150"], "1181675");
static AGENCY_IMAGES: ImageSet = images!("3184465", ["3184339", "3184357", "3184418"], "3184436");

/// Every registered profile in tie-break order.
pub static PROFILES: &[IndustryProfile] = &[
    IndustryProfile {
        id: "saas",
        keywords: &["saas", "software", "dashboard", "analytics", "platform", "tool", "automation"],
        color_scheme: "blue",
        hero: Hero {
            headline: "Streamline Your Workflow",
            subheadline: "The all-in-one platform that helps teams collaborate, automate, and achieve more",
            cta_primary: "Start Free Trial",
            cta_secondary: "Watch Demo",
        },
        features: &[
            feature!("Real-Time Collaboration", "Work together seamlessly with your team in real-time"),
            feature!("Advanced Analytics", "Get deep insights into your data with powerful analytics"),
            feature!("Automation Tools", "Automate repetitive tasks and save hours every week"),
            feature!("Integrations", "Connect with your favorite tools and apps"),
            feature!("Secure & Reliable", "Enterprise-grade security with 99.9% uptime"),
            feature!("24/7 Support", "Our team is here to help you succeed"),
        ],
        stats: Some(&[
            stat!("50K+", "Active Users"),
            stat!("1M+", "Tasks Completed"),
            stat!("99.9%", "Uptime"),
            stat!("24/7", "Support"),
        ]),
        testimonial: Some(Testimonial {
            quote: "This platform has transformed how our team works. We've increased productivity by 40% and couldn't be happier.",
            author: "Sarah Johnson",
            role: "CTO, TechCorp",
        }),
        sections: &["hero", "features", "stats", "pricing", "testimonials", "cta"],
        images: &SAAS_IMAGES,
    },
    IndustryProfile {
        id: "ecommerce",
        keywords: &["shop", "store", "ecommerce", "buy", "sell", "product", "marketplace", "retail"],
        color_scheme: "purple",
        hero: Hero {
            headline: "Discover Premium Products",
            subheadline: "Shop the latest collection of handcrafted items designed with care",
            cta_primary: "Shop Now",
            cta_secondary: "View Collections",
        },
        features: &[
            feature!("Curated Selection", "Hand-picked products from trusted artisans"),
            feature!("Fast Shipping", "Free shipping on orders over $50"),
            feature!("Secure Checkout", "Safe and encrypted payment processing"),
            feature!("Easy Returns", "30-day hassle-free return policy"),
            feature!("Quality Guarantee", "Every product is quality checked"),
            feature!("Customer Care", "Dedicated support team ready to help"),
        ],
        stats: None,
        testimonial: Some(Testimonial {
            quote: "Amazing quality and fast delivery! I've been a customer for 2 years and never disappointed.",
            author: "Michael Chen",
            role: "Verified Customer",
        }),
        sections: &["hero", "products", "features", "testimonials", "newsletter"],
        images: &ECOMMERCE_IMAGES,
    },
    IndustryProfile {
        id: "restaurant",
        keywords: &["restaurant", "food", "dining", "menu", "cafe", "bistro", "kitchen", "chef"],
        color_scheme: "orange",
        hero: Hero {
            headline: "Exceptional Dining Experience",
            subheadline: "Farm-to-table cuisine crafted with passion and served with love",
            cta_primary: "Reserve Table",
            cta_secondary: "View Menu",
        },
        features: &[
            feature!("Fresh Ingredients", "Locally sourced, organic ingredients daily"),
            feature!("Expert Chefs", "Award-winning culinary team"),
            feature!("Cozy Atmosphere", "Perfect ambiance for any occasion"),
            feature!("Private Events", "Host your special celebrations with us"),
            feature!("Wine Selection", "Curated list of fine wines"),
            feature!("Catering Services", "Bring our cuisine to your event"),
        ],
        stats: None,
        testimonial: Some(Testimonial {
            quote: "The best dining experience in town! Every dish is a masterpiece and the service is impeccable.",
            author: "Emily Rodriguez",
            role: "Food Critic",
        }),
        sections: &["hero", "menu", "features", "gallery", "reservations"],
        images: &RESTAURANT_IMAGES,
    },
    IndustryProfile {
        id: "fitness",
        keywords: &["fitness", "gym", "workout", "training", "exercise", "health", "wellness"],
        color_scheme: "red",
        hero: Hero {
            headline: "Transform Your Body",
            subheadline: "Join our community and achieve your fitness goals with expert guidance",
            cta_primary: "Start Free Week",
            cta_secondary: "View Classes",
        },
        features: &[
            feature!("Expert Trainers", "Certified professionals to guide your journey"),
            feature!("Modern Equipment", "State-of-the-art fitness equipment"),
            feature!("Group Classes", "Yoga, HIIT, Spin, and more"),
            feature!("Personal Training", "Customized workout plans"),
            feature!("Nutrition Coaching", "Meal plans and dietary guidance"),
            feature!("Flexible Hours", "Open 24/7 for your convenience"),
        ],
        stats: Some(&[
            stat!("10K+", "Members"),
            stat!("50+", "Classes Weekly"),
            stat!("15+", "Expert Trainers"),
            stat!("24/7", "Access"),
        ]),
        testimonial: Some(Testimonial {
            quote: "I've tried many gyms, but this one truly helped me reach my goals. The trainers are amazing!",
            author: "David Martinez",
            role: "Member Since 2021",
        }),
        sections: &["hero", "features", "classes", "trainers", "pricing"],
        images: &FITNESS_IMAGES,
    },
    IndustryProfile {
        id: "realestate",
        keywords: &["real estate", "property", "home", "house", "apartment", "listing", "broker", "realtor"],
        color_scheme: "slate",
        hero: Hero {
            headline: "Find Your Dream Home",
            subheadline: "Discover exceptional properties in prime locations with expert guidance",
            cta_primary: "Browse Listings",
            cta_secondary: "Schedule Tour",
        },
        features: &[
            feature!("Prime Locations", "Properties in the most desirable neighborhoods"),
            feature!("Expert Agents", "Experienced realtors to guide you"),
            feature!("Virtual Tours", "360° virtual property tours"),
            feature!("Market Insights", "Latest market trends and analysis"),
            feature!("Easy Process", "Streamlined buying and selling"),
            feature!("Financing Help", "Connect with trusted lenders"),
        ],
        stats: Some(&[
            stat!("500+", "Properties Sold"),
            stat!("95%", "Client Satisfaction"),
            stat!("20+", "Years Experience"),
            stat!("$2B+", "Total Sales"),
        ]),
        testimonial: Some(Testimonial {
            quote: "They made buying our first home a breeze. Professional, knowledgeable, and truly caring.",
            author: "Lisa & James Wilson",
            role: "Happy Homeowners",
        }),
        sections: &["hero", "listings", "features", "testimonials", "contact"],
        images: &REALESTATE_IMAGES,
    },
    IndustryProfile {
        id: "healthcare",
        keywords: &["healthcare", "medical", "clinic", "hospital", "doctor", "health", "wellness", "therapy"],
        color_scheme: "teal",
        hero: Hero {
            headline: "Compassionate Healthcare",
            subheadline: "Expert medical care with a personal touch for you and your family",
            cta_primary: "Book Appointment",
            cta_secondary: "Our Services",
        },
        features: &[
            feature!("Experienced Doctors", "Board-certified medical professionals"),
            feature!("Modern Facilities", "State-of-the-art medical equipment"),
            feature!("Comprehensive Care", "Full range of medical services"),
            feature!("Telemedicine", "Virtual consultations available"),
            feature!("Insurance Accepted", "Work with all major providers"),
            feature!("Emergency Care", "24/7 urgent care services"),
        ],
        stats: None,
        testimonial: Some(Testimonial {
            quote: "The care I received was exceptional. The staff is caring, and the doctors truly listen.",
            author: "Patricia Anderson",
            role: "Patient",
        }),
        sections: &["hero", "services", "doctors", "features", "contact"],
        images: &HEALTHCARE_IMAGES,
    },
    IndustryProfile {
        id: "portfolio",
        keywords: &["portfolio", "creative", "designer", "artist", "photographer", "freelance", "work"],
        color_scheme: "emerald",
        hero: Hero {
            headline: "Creative Designer & Developer",
            subheadline: "Crafting beautiful digital experiences that make an impact",
            cta_primary: "View Work",
            cta_secondary: "Get In Touch",
        },
        features: &[
            feature!("UI/UX Design", "Creating intuitive and beautiful interfaces"),
            feature!("Brand Identity", "Developing unique brand identities"),
            feature!("Web Development", "Building responsive websites and apps"),
            feature!("Strategy", "Digital strategy and consulting"),
            feature!("Prototyping", "Interactive prototypes and mockups"),
            feature!("Consulting", "Expert advice for your projects"),
        ],
        stats: Some(&[
            stat!("100+", "Projects Completed"),
            stat!("50+", "Happy Clients"),
            stat!("8+", "Years Experience"),
            stat!("15+", "Awards Won"),
        ]),
        testimonial: Some(Testimonial {
            quote: "Outstanding work! They brought our vision to life and exceeded all expectations.",
            author: "Rachel Kim",
            role: "CEO, StartupCo",
        }),
        sections: &["hero", "projects", "about", "skills", "contact"],
        images: &PORTFOLIO_IMAGES,
    },
    IndustryProfile {
        id: "agency",
        keywords: &["agency", "marketing", "advertising", "digital", "branding", "services"],
        color_scheme: "indigo",
        hero: Hero {
            headline: "Grow Your Business",
            subheadline: "Full-service digital agency helping brands reach their full potential",
            cta_primary: "Start Project",
            cta_secondary: "Our Work",
        },
        features: &[
            feature!("Digital Marketing", "Data-driven marketing strategies"),
            feature!("Brand Strategy", "Build a memorable brand identity"),
            feature!("Web Design", "Beautiful, conversion-focused websites"),
            feature!("SEO & Analytics", "Rank higher and track performance"),
            feature!("Social Media", "Engage your audience effectively"),
            feature!("Content Creation", "Compelling content that converts"),
        ],
        stats: Some(&[
            stat!("200+", "Clients Served"),
            stat!("500+", "Projects Delivered"),
            stat!("95%", "Client Retention"),
            stat!("10+", "Years in Business"),
        ]),
        testimonial: Some(Testimonial {
            quote: "They helped us triple our online revenue in just 6 months. Absolutely phenomenal results!",
            author: "Mark Stevens",
            role: "Founder, GrowthCo",
        }),
        sections: &["hero", "services", "portfolio", "stats", "testimonials", "cta"],
        images: &AGENCY_IMAGES,
    },
    IndustryProfile {
        id: "creative",
        keywords: &["studio", "illustration", "animation", "artwork", "musician", "filmmaker", "ceramics", "tattoo"],
        color_scheme: "gradient",
        hero: Hero {
            headline: "Art That Tells Your Story",
            subheadline: "An independent studio making illustration, motion and visual stories for bold brands",
            cta_primary: "Explore the Studio",
            cta_secondary: "Commission a Piece",
        },
        features: &[
            feature!("Illustration", "Hand-drawn and digital artwork with a signature style"),
            feature!("Motion Design", "Animated stories for screens of every size"),
            feature!("Art Direction", "A single visual voice across every touchpoint"),
            feature!("Exhibitions", "Curated shows and installations"),
            feature!("Commissions", "One-off pieces made for you"),
            feature!("Workshops", "Hands-on sessions for teams and communities"),
        ],
        stats: Some(&[
            stat!("300+", "Pieces Created"),
            stat!("40+", "Exhibitions"),
            stat!("12", "Years Creating"),
            stat!("25+", "Collaborators"),
        ]),
        testimonial: Some(Testimonial {
            quote: "Working with the studio felt effortless. The final pieces captured our brand better than we could describe it.",
            author: "Noah Bennett",
            role: "Creative Director, Lumen Records",
        }),
        sections: &["hero", "work", "about", "stats", "testimonials", "contact"],
        images: &DEFAULT_IMAGES,
    },
];

/// Look up a profile by id.
#[must_use]
pub fn find_profile(id: &str) -> Option<&'static IndustryProfile> {
    PROFILES.iter().find(|p| p.id == id)
}

/// Look up a profile by id, falling back to [`DEFAULT_PROFILE`].
#[must_use]
pub fn profile(id: &str) -> &'static IndustryProfile {
    find_profile(id).unwrap_or_else(default_profile)
}

/// The profile used when classification finds no match.
#[must_use]
pub fn default_profile() -> &'static IndustryProfile {
    &PROFILES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::find_palette;

    #[test]
    fn test_registry_invariants() {
        for p in PROFILES {
            assert!(!p.keywords.is_empty(), "{} has no keywords", p.id);
            assert!(p.features.len() >= 6, "{} has too few features", p.id);
            assert!(p.has_section("hero"), "{} has no hero", p.id);
            assert!(
                find_palette(p.color_scheme).is_some(),
                "{} uses unregistered palette {}",
                p.id,
                p.color_scheme
            );
            assert!(p.keywords.iter().all(|k| *k == k.to_lowercase()));
        }
    }

    #[test]
    fn test_default_profile_is_first() {
        assert_eq!(default_profile().id, DEFAULT_PROFILE);
        assert_eq!(profile("nope").id, DEFAULT_PROFILE);
    }

    #[test]
    fn test_find_profile() {
        let p = find_profile("restaurant").expect("restaurant registered");
        assert_eq!(p.color_scheme, "orange");
        assert_eq!(p.hero.cta_primary, "Reserve Table");
        assert!(find_profile("bakery").is_none());
    }

    #[test]
    fn test_image_urls() {
        let p = profile("saas");
        assert_eq!(
            p.images.hero,
            "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=1920"
        );
        assert!(p.images.features.iter().all(|u| u.ends_with("w=800")));
        assert!(p.images.about.ends_with("w=1200"));
    }

    #[test]
    fn test_feature_titles_take_prefix() {
        let titles: Vec<_> = profile("agency").feature_titles(2).collect();
        assert_eq!(titles, vec!["Digital Marketing", "Brand Strategy"]);
    }
}
