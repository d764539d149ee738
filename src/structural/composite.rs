// Composite Pattern - file system tree
// Files and folders share one interface; folders render their children one
// indent step deeper.

pub const DEFAULT_INDENT_STEP: usize = 2;

pub trait FileSystemItem {
    fn name(&self) -> &str;

    /// Appends this item's lines, starting at `indent` spaces.
    fn show_into(&self, indent: usize, step: usize, out: &mut Vec<String>);

    fn show(&self, indent: usize) -> Vec<String> {
        let mut out = Vec::new();
        self.show_into(indent, DEFAULT_INDENT_STEP, &mut out);
        out
    }
}

pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemItem for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn show_into(&self, indent: usize, _step: usize, out: &mut Vec<String>) {
        out.push(format!("{}|📄 {}", " ".repeat(indent), self.name));
    }
}

pub struct Folder {
    name: String,
    children: Vec<Box<dyn FileSystemItem>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, item: impl FileSystemItem + 'static) -> &mut Self {
        self.children.push(Box::new(item));
        self
    }

    pub fn children(&self) -> &[Box<dyn FileSystemItem>] {
        &self.children
    }

    /// Renders the whole tree with a custom indent step.
    pub fn render(&self, step: usize) -> String {
        let mut out = Vec::new();
        self.show_into(0, step, &mut out);
        out.join("\n")
    }
}

impl FileSystemItem for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn show_into(&self, indent: usize, step: usize, out: &mut Vec<String>) {
        out.push(format!("{}- 📁 {}", " ".repeat(indent), self.name));
        for child in &self.children {
            child.show_into(indent + step, step, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Folder {
        let mut documents = Folder::new("Documents");
        documents
            .add(File::new("resume.pdf"))
            .add(File::new("cover_letter.docx"));

        let mut photos = Folder::new("Photos");
        photos
            .add(File::new("vacation.jpg"))
            .add(File::new("birthday.png"));

        let mut root = Folder::new("root");
        root.add(documents).add(photos).add(File::new("readme.txt"));
        root
    }

    #[test]
    fn test_file_show() {
        assert_eq!(File::new("a.txt").show(3), vec!["   |📄 a.txt"]);
    }

    #[test]
    fn test_empty_folder() {
        assert_eq!(Folder::new("empty").show(0), vec!["- 📁 empty"]);
    }

    #[test]
    fn test_tree_rendering() {
        let lines = sample_tree().show(0);
        assert_eq!(
            lines,
            vec![
                "- 📁 root",
                "  - 📁 Documents",
                "    |📄 resume.pdf",
                "    |📄 cover_letter.docx",
                "  - 📁 Photos",
                "    |📄 vacation.jpg",
                "    |📄 birthday.png",
                "  |📄 readme.txt",
            ]
        );
    }

    #[test]
    fn test_custom_step() {
        let rendered = sample_tree().render(4);
        assert!(rendered.contains("\n    - 📁 Photos\n"));
        assert!(rendered.contains("\n        |📄 birthday.png"));
    }

    #[test]
    fn test_children_in_insertion_order() {
        let tree = sample_tree();
        let names: Vec<&str> = tree.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Documents", "Photos", "readme.txt"]);
    }
}
