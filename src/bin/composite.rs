// Composite: folders and files rendered through one interface.

use anyhow::Result;
use design_patterns::demo;
use design_patterns::structural::composite::{File, Folder};

fn main() -> Result<()> {
    let config = demo::init()?;
    println!("{}", demo::banner("Composite Pattern", &config));

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

    println!("{}", root.render(config.indent));
    Ok(())
}
