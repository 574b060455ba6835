mod declare_collection;
