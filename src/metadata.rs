use chrono::NaiveDate;

/// A post that is about to be written: the title given on the command line and the day it is
/// filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostStub {
    pub title: String,
    pub date: NaiveDate,
}

impl PostStub {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `YYYY-MM-DD-<title with spaces as hyphens>.md`
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date_string(), self.title.replace(' ', "-"))
    }

    // title is inserted as-is; quotes are not escaped
    pub fn front_matter(&self) -> String {
        format!(
            concat!(
                "---\n",
                "layout: post\n",
                "title:  \"{}\"\n",
                "date:   {}\n",
                "categories: jekyll update\n",
                "---",
            ),
            self.title,
            self.date_string()
        )
    }
}
