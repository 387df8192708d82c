pub mod comment;
pub mod favorite;
pub mod game;
pub mod movie;
pub mod user;
pub mod wishlist;

pub use comment::{Comment, CommentUpdate, NewComment};
pub use favorite::{FavoriteMovies, FavoriteMoviesUpdate, NewFavoriteMovies};
pub use game::{Game, GameUpdate, NewGame};
pub use movie::{Movie, MovieUpdate, NewMovie};
pub use user::{PublicUser, User};
pub use wishlist::{NewWishlist, Wishlist, WishlistUpdate};
