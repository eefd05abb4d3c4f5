//! Session state: the open library plus command execution.

use circdb::{Book, BookPatch, Entity, Error, Library, LibraryStats, Member, MemberPatch};

/// A fully parsed command, ready to execute against the library.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    BookAdd {
        isbn: String,
        title: String,
        author: String,
        genre: String,
        total_copies: u32,
    },
    BookGet { isbn: String },
    BookSearch { query: String },
    BookUpdate { isbn: String, patch: BookPatch },
    BookDel { isbn: String },
    BookList,
    MemberAdd {
        id: String,
        name: String,
        email: String,
    },
    MemberGet { id: String },
    MemberUpdate { id: String, patch: MemberPatch },
    MemberDel { id: String },
    MemberList,
    Borrow { member: String, isbn: String },
    Return { member: String, isbn: String },
    Loans { member: String },
    Available,
    Exhausted,
    Genres,
    Stats,
}

/// What a command produced, for the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// A mutation succeeded with nothing to show
    Done,
    /// A single book snapshot
    Book(Book),
    /// Zero or more book snapshots
    Books(Vec<Book>),
    /// A single member snapshot
    Member(Member),
    /// Zero or more member snapshots
    Members(Vec<Member>),
    /// Plain names (genre listing)
    Names(Vec<String>),
    /// Whole-library counters
    Stats(LibraryStats),
}

/// The CLI session: one open library.
pub struct SessionState {
    lib: Library,
}

impl SessionState {
    pub fn new(lib: Library) -> Self {
        Self { lib }
    }

    /// Execute one command. All business rules live in the library;
    /// this only adapts lookups that return `Option` into the not-found
    /// error so the formatter has a single failure path.
    pub fn execute(&mut self, cmd: CliCommand) -> Result<CommandOutput, Error> {
        match cmd {
            CliCommand::BookAdd {
                isbn,
                title,
                author,
                genre,
                total_copies,
            } => {
                self.lib
                    .catalog
                    .add(&isbn, &title, &author, &genre, total_copies)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::BookGet { isbn } => match self.lib.catalog.get(&isbn) {
                Some(book) => Ok(CommandOutput::Book(book)),
                None => Err(Error::NotFound {
                    entity: Entity::Book,
                    id: isbn,
                }),
            },
            CliCommand::BookSearch { query } => {
                Ok(CommandOutput::Books(self.lib.catalog.search(&query)))
            }
            CliCommand::BookUpdate { isbn, patch } => {
                self.lib.catalog.update(&isbn, patch)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::BookDel { isbn } => {
                self.lib.catalog.remove(&isbn)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::BookList => Ok(CommandOutput::Books(self.lib.catalog.list())),
            CliCommand::MemberAdd { id, name, email } => {
                self.lib.roster.add(&id, &name, &email)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::MemberGet { id } => match self.lib.roster.get(&id) {
                Some(member) => Ok(CommandOutput::Member(member)),
                None => Err(Error::NotFound {
                    entity: Entity::Member,
                    id,
                }),
            },
            CliCommand::MemberUpdate { id, patch } => {
                self.lib.roster.update(&id, patch)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::MemberDel { id } => {
                self.lib.roster.remove(&id)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::MemberList => Ok(CommandOutput::Members(self.lib.roster.list())),
            CliCommand::Borrow { member, isbn } => {
                self.lib.lending.borrow(&member, &isbn)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::Return { member, isbn } => {
                self.lib.lending.return_book(&member, &isbn)?;
                Ok(CommandOutput::Done)
            }
            CliCommand::Loans { member } => {
                Ok(CommandOutput::Books(self.lib.reports.loans_of(&member)?))
            }
            CliCommand::Available => Ok(CommandOutput::Books(self.lib.reports.available())),
            CliCommand::Exhausted => Ok(CommandOutput::Books(self.lib.reports.exhausted())),
            CliCommand::Genres => Ok(CommandOutput::Names(self.lib.genres())),
            CliCommand::Stats => Ok(CommandOutput::Stats(self.lib.stats())),
        }
    }
}
