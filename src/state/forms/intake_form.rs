//! Intake form state management

use super::field::FormField;
use crate::state::Submission;

/// Campaigns an agent can enroll under
pub const CAMPAIGNS: &[&str] = &["Safe Link", "Starlink", "Vista", "SafetyNet"];

/// US state names for the state select field
pub const US_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Number of input fields (the buttons row sits past the last field)
pub const FIELD_COUNT: usize = 15;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The agent intake form
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub campaign: FormField,
    pub first_name: FormField,
    pub last_name: FormField,
    pub ssn: FormField,
    pub dob: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub address: FormField,
    pub address2: FormField,
    pub city: FormField,
    pub state: FormField,
    pub zip_code: FormField,
    pub id_document: FormField,
    pub headshot: FormField,
    pub card_photo: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Clear, 2=Quit)
    pub selected_button: usize,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            campaign: FormField::select("campaign", "Campaign", CAMPAIGNS),
            first_name: FormField::text("first_name", "First Name"),
            last_name: FormField::text("last_name", "Last Name"),
            ssn: FormField::text("ssn", "SSN (9 digits)"),
            dob: FormField::text("dob", "Date of Birth (YYYY-MM-DD)"),
            phone: FormField::text("phone", "Phone (10 digits)"),
            email: FormField::text("email", "Email"),
            address: FormField::text("address", "Address"),
            address2: FormField::text("address2", "Address Line 2"),
            city: FormField::text("city", "City"),
            state: FormField::select("state", "State", US_STATES),
            zip_code: FormField::text("zip_code", "ZIP Code (5 digits)"),
            id_document: FormField::path("id_document", "ID Document (file path)"),
            headshot: FormField::path("headshot", "Headshot Image (file path)"),
            card_photo: FormField::path("card_photo", "Card Holding Image (file path)"),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Reset every field to its default and return focus to the top
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FIELD_COUNT
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 3;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = 2;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Bundle the field values and uploaded URLs into the email payload
    pub fn to_submission(
        &self,
        id_document_url: String,
        headshot_url: String,
        card_photo_url: String,
    ) -> Submission {
        Submission {
            campaign: self.campaign.selected_option().unwrap_or_default().to_string(),
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            ssn: self.ssn.as_text().to_string(),
            dob: self.dob.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            email: self.email.as_text().to_string(),
            address: self.address.as_text().to_string(),
            address2: self.address2.as_text().to_string(),
            city: self.city.as_text().to_string(),
            state: self.state.selected_option().unwrap_or_default().to_string(),
            zip_code: self.zip_code.as_text().to_string(),
            id_document_url,
            headshot_url,
            card_photo_url,
        }
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for IntakeForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // input fields plus the buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_COUNT);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.campaign,
            1 => &mut self.first_name,
            2 => &mut self.last_name,
            3 => &mut self.ssn,
            4 => &mut self.dob,
            5 => &mut self.phone,
            6 => &mut self.email,
            7 => &mut self.address,
            8 => &mut self.address2,
            9 => &mut self.city,
            10 => &mut self.state,
            11 => &mut self.zip_code,
            12 => &mut self.id_document,
            13 => &mut self.headshot,
            // For the buttons row, return the last field as dummy (won't be used for input)
            _ => &mut self.card_photo,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.campaign),
            1 => Some(&self.first_name),
            2 => Some(&self.last_name),
            3 => Some(&self.ssn),
            4 => Some(&self.dob),
            5 => Some(&self.phone),
            6 => Some(&self.email),
            7 => Some(&self.address),
            8 => Some(&self.address2),
            9 => Some(&self.city),
            10 => Some(&self.state),
            11 => Some(&self.zip_code),
            12 => Some(&self.id_document),
            13 => Some(&self.headshot),
            14 => Some(&self.card_photo),
            // Index 15 is the buttons row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut IntakeForm, index: usize, text: &str) {
        form.set_active_field(index);
        for c in text.chars() {
            form.get_active_field_mut().push_char(c);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_starts_at_first_field() {
            let form = IntakeForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, 0);
        }

        #[test]
        fn test_field_count_includes_buttons_row() {
            let form = IntakeForm::new();
            assert_eq!(form.field_count(), 16);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = IntakeForm::new();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = IntakeForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, FIELD_COUNT);
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = IntakeForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, FIELD_COUNT);
        }

        #[test]
        fn test_next_button_wraps() {
            let mut form = IntakeForm::new();
            form.selected_button = 2;
            form.next_button();
            assert_eq!(form.selected_button, 0);
        }

        #[test]
        fn test_prev_button_wraps() {
            let mut form = IntakeForm::new();
            form.prev_button();
            assert_eq!(form.selected_button, 2);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = IntakeForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "campaign");
            assert_eq!(form.get_field(3).unwrap().name, "ssn");
            assert_eq!(form.get_field(10).unwrap().name, "state");
            assert_eq!(form.get_field(14).unwrap().name, "card_photo");
            assert!(form.get_field(15).is_none()); // buttons row
            assert!(form.get_field(16).is_none());
        }
    }

    mod field_input {
        use super::*;

        #[test]
        fn test_text_input_through_active_field() {
            let mut form = IntakeForm::new();
            type_into(&mut form, 1, "Jane");
            assert_eq!(form.first_name.as_text(), "Jane");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut form = IntakeForm::new();
            type_into(&mut form, 2, "Doe");
            form.get_active_field_mut().pop_char();
            assert_eq!(form.last_name.as_text(), "Do");
        }

        #[test]
        fn test_select_cycles_options() {
            let mut form = IntakeForm::new();
            form.campaign.select_next();
            assert_eq!(form.campaign.selected_option(), Some("Safe Link"));
            form.campaign.select_next();
            assert_eq!(form.campaign.selected_option(), Some("Starlink"));
            form.campaign.select_prev();
            assert_eq!(form.campaign.selected_option(), Some("Safe Link"));
        }

        #[test]
        fn test_select_prev_from_empty_picks_last() {
            let mut form = IntakeForm::new();
            form.campaign.select_prev();
            assert_eq!(form.campaign.selected_option(), Some("SafetyNet"));
        }

        #[test]
        fn test_select_jump_by_initial() {
            let mut form = IntakeForm::new();
            form.state.push_char('t');
            assert_eq!(form.state.selected_option(), Some("Tennessee"));
            form.state.push_char('t');
            assert_eq!(form.state.selected_option(), Some("Texas"));
        }

        #[test]
        fn test_backspace_clears_selection() {
            let mut form = IntakeForm::new();
            form.campaign.select_next();
            form.campaign.pop_char();
            assert_eq!(form.campaign.selected_option(), None);
            assert!(form.campaign.is_empty());
        }

        #[test]
        fn test_path_field_takes_text() {
            let mut form = IntakeForm::new();
            type_into(&mut form, 13, "/tmp/headshot.png");
            assert_eq!(form.headshot.as_text(), "/tmp/headshot.png");
            assert!(!form.headshot.is_empty());
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = IntakeForm::new();
            type_into(&mut form, 1, "Jane");
            form.campaign.select_next();
            form.selected_button = 2;
            form.reset();
            assert_eq!(form.first_name.as_text(), "");
            assert_eq!(form.campaign.selected_option(), None);
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, 0);
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_to_submission_bundles_fields_and_urls() {
            let mut form = IntakeForm::new();
            form.campaign.push_char('v');
            type_into(&mut form, 1, "Jane");
            type_into(&mut form, 2, "Doe");
            type_into(&mut form, 3, "123456789");
            form.state.push_char('o');
            let submission = form.to_submission(
                "https://img.example/id.png".to_string(),
                "https://img.example/headshot.png".to_string(),
                "https://img.example/card.png".to_string(),
            );
            assert_eq!(submission.campaign, "Vista");
            assert_eq!(submission.first_name, "Jane");
            assert_eq!(submission.last_name, "Doe");
            assert_eq!(submission.ssn, "123456789");
            assert_eq!(submission.state, "Ohio");
            assert_eq!(submission.id_document_url, "https://img.example/id.png");
            assert_eq!(submission.card_photo_url, "https://img.example/card.png");
        }
    }
}
