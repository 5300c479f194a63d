//! Contract models for the mentors service

/// One mentor's persisted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentor {
    /// Unique identifier, immutable once created
    pub id: String,
    /// Display name
    pub name: String,
    /// Current role (e.g. "Staff Engineer")
    pub role: String,
    /// Current company
    pub company: String,
    /// Avatar URL, unvalidated
    pub image_url: String,
    /// Free-text biography
    pub bio: String,
    /// Ordered mentoring topics
    pub topics: Vec<String>,
    /// Whether the mentor is listed publicly
    pub is_visible: bool,
    /// Whether the mentor is featured on the landing page
    pub featured: bool,
    /// Display price text ("Free", "$120/hr")
    pub price: String,
    /// Display experience text ("7 years")
    pub experience: String,
    /// Review count
    pub reviews: i32,
}

/// The id-less shape accepted by create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorDraft {
    pub name: String,
    pub role: String,
    pub company: String,
    pub image_url: String,
    pub bio: String,
    pub topics: Vec<String>,
    pub is_visible: bool,
    pub featured: bool,
    pub price: String,
    pub experience: String,
    pub reviews: i32,
}

impl MentorDraft {
    /// Attach an identifier, producing a full record
    pub fn with_id(self, id: String) -> Mentor {
        Mentor {
            id,
            name: self.name,
            role: self.role,
            company: self.company,
            image_url: self.image_url,
            bio: self.bio,
            topics: self.topics,
            is_visible: self.is_visible,
            featured: self.featured,
            price: self.price,
            experience: self.experience,
            reviews: self.reviews,
        }
    }
}
