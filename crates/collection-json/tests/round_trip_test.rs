//! Property tests: any constructor-built collection survives emit + parse.

use proptest::{option, prelude::*};

use collection_json::{
    Collection, Data, Entity, Error, Item, Link, Query, Scalar, Template, from_document,
};

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :/._-]{1,12}"
}

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        text().prop_map(Scalar::from),
        any::<i64>().prop_map(Scalar::from),
        any::<bool>().prop_map(Scalar::from),
    ]
}

fn data() -> impl Strategy<Value = Data> {
    (text(), option::of(scalar()), option::of(text())).prop_map(|(name, value, prompt)| {
        let mut data = Data::new(name);
        data.set_value(value);
        data.set_prompt(prompt);
        data
    })
}

fn link() -> impl Strategy<Value = Link> {
    (
        text(),
        text(),
        option::of(text()),
        option::of(text()),
        option::of(text()),
    )
        .prop_map(|(href, rel, name, render, prompt)| {
            let mut link = Link::new(href, rel);
            if let Some(name) = name {
                link = link.with_name(name);
            }
            if let Some(render) = render {
                link = link.with_render(render);
            }
            if let Some(prompt) = prompt {
                link = link.with_prompt(prompt);
            }
            link
        })
}

fn query() -> impl Strategy<Value = Query> {
    (
        text(),
        text(),
        option::of(text()),
        option::of(text()),
        prop::collection::vec(data(), 0..3),
    )
        .prop_map(|(href, rel, name, prompt, data)| {
            let mut query = Query::new(href, rel).with_data(data);
            if let Some(name) = name {
                query = query.with_name(name);
            }
            if let Some(prompt) = prompt {
                query = query.with_prompt(prompt);
            }
            query
        })
}

fn item() -> impl Strategy<Value = Item> {
    (
        option::of(text()),
        prop::collection::vec(data(), 0..3),
        prop::collection::vec(link(), 0..3),
    )
        .prop_map(|(href, data, links)| {
            let mut item = Item::new().with_data(data).with_links(links);
            item.set_href(href);
            item
        })
}

fn error() -> impl Strategy<Value = Error> {
    (option::of(text()), option::of(text()), option::of(text())).prop_map(
        |(code, message, title)| {
            let mut error = Error::new();
            if let Some(code) = code {
                error = error.with_code(code);
            }
            if let Some(message) = message {
                error = error.with_message(message);
            }
            if let Some(title) = title {
                error = error.with_title(title);
            }
            error
        },
    )
}

fn collection() -> impl Strategy<Value = Collection> {
    (
        text(),
        option::of(text()),
        option::of(error()),
        option::of(prop::collection::vec(data(), 0..3).prop_map(Template::new)),
        prop::collection::vec(item(), 0..3),
        prop::collection::vec(link(), 0..3),
        prop::collection::vec(query(), 0..3),
    )
        .prop_map(|(version, href, error, template, items, links, queries)| {
            let mut collection = Collection::new()
                .with_version(version)
                .with_items(items)
                .with_links(links)
                .with_queries(queries);
            collection.set_href(href);
            collection.set_error(error);
            collection.set_template(template);
            collection
        })
}

proptest! {
    #[test]
    fn emitted_text_parses_back_equal(collection in collection()) {
        let parsed = from_document(&collection.to_text()).unwrap();
        prop_assert_eq!(parsed, collection);
    }

    #[test]
    fn pretty_text_parses_back_equal(collection in collection()) {
        let parsed = from_document(&collection.to_text_pretty()).unwrap();
        prop_assert_eq!(parsed, collection);
    }

    #[test]
    fn to_map_is_idempotent(collection in collection()) {
        prop_assert_eq!(collection.to_map(), collection.to_map());
    }
}
