use crate::events::EventRepository;

pub trait Store {
    type Events<'a>: EventRepository
    where
        Self: 'a;

    fn events(&self) -> Self::Events<'_>;
}
