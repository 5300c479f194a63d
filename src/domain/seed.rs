//! Fixed reference mentors inserted once into an empty table

use crate::contract::Mentor;

/// The six reference mentors. Ids are stable so repeated seeding against a
/// wiped table produces the same dataset.
pub fn reference_mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: "7d4f3b9a-51c2-4e8a-b6f0-9a2d5c817e43".to_string(),
            name: "Sarah Chen".to_string(),
            role: "Staff Engineer".to_string(),
            company: "Stripe".to_string(),
            image_url: "https://i.pravatar.cc/150?img=47".to_string(),
            bio: "Helps engineers level up in system design and navigate the path to staff."
                .to_string(),
            topics: vec![
                "System Design".to_string(),
                "Career Growth".to_string(),
                "Distributed Systems".to_string(),
            ],
            is_visible: true,
            featured: true,
            price: "$120/hr".to_string(),
            experience: "12 years".to_string(),
            reviews: 148,
        },
        Mentor {
            id: "2a8c6e1f-93b4-4d07-8c5e-f1b2a6d90384".to_string(),
            name: "Marcus Johnson".to_string(),
            role: "Engineering Manager".to_string(),
            company: "Netflix".to_string(),
            image_url: "https://i.pravatar.cc/150?img=12".to_string(),
            bio: "Former IC turned manager, coaching first-time leads through the transition."
                .to_string(),
            topics: vec![
                "Leadership".to_string(),
                "Team Building".to_string(),
                "Interviewing".to_string(),
            ],
            is_visible: true,
            featured: false,
            price: "$95/hr".to_string(),
            experience: "10 years".to_string(),
            reviews: 92,
        },
        Mentor {
            id: "c91b7a3d-0e52-4f68-9b17-d4a8c2e5f601".to_string(),
            name: "Priya Patel".to_string(),
            role: "Senior Data Scientist".to_string(),
            company: "Airbnb".to_string(),
            image_url: "https://i.pravatar.cc/150?img=32".to_string(),
            bio: "Mentors career switchers breaking into data science and ML.".to_string(),
            topics: vec![
                "Machine Learning".to_string(),
                "Python".to_string(),
                "Data Visualization".to_string(),
            ],
            is_visible: true,
            featured: true,
            price: "Free".to_string(),
            experience: "8 years".to_string(),
            reviews: 64,
        },
        Mentor {
            id: "5e0a9d2c-74f8-4b31-a86d-3c7e1f9b0d52".to_string(),
            name: "Diego Ramirez".to_string(),
            role: "Principal Architect".to_string(),
            company: "Shopify".to_string(),
            image_url: "https://i.pravatar.cc/150?img=59".to_string(),
            bio: "Deep dives on service decomposition and event-driven platforms.".to_string(),
            topics: vec![
                "Microservices".to_string(),
                "Event-Driven Architecture".to_string(),
                "Ruby".to_string(),
            ],
            is_visible: true,
            featured: false,
            price: "$150/hr".to_string(),
            experience: "15 years".to_string(),
            reviews: 201,
        },
        Mentor {
            id: "98f2c4b6-ae15-4c79-b3d8-6e0a5f2c918b".to_string(),
            name: "Emma Larsson".to_string(),
            role: "Product Designer".to_string(),
            company: "Figma".to_string(),
            image_url: "https://i.pravatar.cc/150?img=24".to_string(),
            bio: "Portfolio reviews and design-system mentoring for early-career designers."
                .to_string(),
            topics: vec![
                "UX Research".to_string(),
                "Design Systems".to_string(),
                "Prototyping".to_string(),
            ],
            is_visible: true,
            featured: false,
            price: "$80/hr".to_string(),
            experience: "7 years".to_string(),
            reviews: 53,
        },
        Mentor {
            id: "1b6d8e0a-c753-4a92-8f41-2e9c7b5a3d06".to_string(),
            name: "Kenji Nakamura".to_string(),
            role: "SRE Lead".to_string(),
            company: "Datadog".to_string(),
            image_url: "https://i.pravatar.cc/150?img=68".to_string(),
            bio: "On-call culture, observability, and making incidents boring.".to_string(),
            topics: vec![
                "Kubernetes".to_string(),
                "Observability".to_string(),
                "Incident Response".to_string(),
            ],
            is_visible: true,
            featured: true,
            price: "Free".to_string(),
            experience: "9 years".to_string(),
            reviews: 77,
        },
    ]
}
